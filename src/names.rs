pub const USER_SESSION_COOKIE_NAME: &str = "user_session";

pub const START_SESSION_URL: &str = "/start-session";
pub const SESSIONS_URL: &str = "/sessions";

pub fn next_question_url(token: &str) -> String {
    format!("/session/{token}/question")
}

pub fn submit_answer_url(token: &str) -> String {
    format!("/session/{token}/answer")
}

pub fn complete_session_url(token: &str) -> String {
    format!("/session/{token}/complete")
}

pub fn results_url(token: &str) -> String {
    format!("/session/{token}/results")
}
