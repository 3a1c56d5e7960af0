pub mod game_2048;
pub mod session;
pub mod tsp_server;

pub mod utils {
    pub mod prelude {
        pub use anyhow::{anyhow, bail, ensure, Context, Error};
        pub type Result<T> = anyhow::Result<T, Error>;

        pub use std::{
            fmt::{self, Display},
            ops::Add,
        };
    }
}

pub mod prelude {
    pub use super::game_2048::prelude::*;
    pub use super::session::*;
    pub use super::tsp_server::*;
    pub use super::utils::prelude::*;
}
