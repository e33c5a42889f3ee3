mod config_tests;
mod property_transition_tests;
mod space_tests;
