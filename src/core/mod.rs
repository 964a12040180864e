pub mod classifier;
pub mod machine;
pub mod ports;
pub mod scheduler;
pub mod time_arith;
pub mod tracker;
pub mod validator;
