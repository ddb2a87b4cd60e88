pub mod create_step_form;
pub mod steps;
pub mod steps_fragment_query;
