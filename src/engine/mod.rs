pub mod fixtures;
pub mod matcher;
pub mod scenario;
pub mod suite;
pub mod validator;
