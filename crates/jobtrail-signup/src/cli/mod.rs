/*
[INPUT]:  Terminal interaction with the user
[OUTPUT]: A completed signup flow driven from the command line
[POS]:    CLI layer - module wiring
[UPDATE]: When CLI commands change
*/

pub mod gateway;
pub mod interactive;

pub use gateway::PromptGateway;
pub use interactive::run_signup;
