// Links provider plugins so their factories are registered via inventory.
// Every plugin crate the server should be able to load from configuration
// must be listed here.
#![allow(unused_imports)]

use key_auth_plugin as _;
