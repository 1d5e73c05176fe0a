pub mod quizzes;

pub mod results;

pub mod system;

pub use quizzes::configure_quiz_routes;
pub use results::configure_results_routes;
pub use system::configure_system_routes;
