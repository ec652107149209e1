mod cli_context_tests;
mod config_tests;
mod dashboard_tests;
mod error_tests;
mod model_tests;
mod normalize_tests;
mod route_tests;
