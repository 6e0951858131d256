pub mod options;
pub mod response;

pub use response::SurveyResponse;
