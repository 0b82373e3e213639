//! HTTP API Client
//!
//! Functions for communicating with the Curió REST API. Every call is a
//! plain request/response with no retry, timeout or caching; callers
//! decide how a failure degrades (local default, inline message, or a
//! hidden widget).

use gloo_net::http::{Request, RequestBuilder};

use crate::state::auth::User;
use crate::state::dashboard::{Activity, DailyProblem, ProgressSummary, Student};
use crate::state::gamification::{AchievementSet, GamificationProgress, LeaderboardEntry};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// Local storage key for the API base URL override
const API_URL_KEY: &str = "curio_api_url";

/// Local storage key for the bearer token — the only durable client state
pub const TOKEN_KEY: &str = "curio_token";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Get the API base URL from local storage or use the default
pub fn get_api_base() -> String {
    let url = local_storage()
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Read the stored bearer token, if any
pub fn get_token() -> Option<String> {
    local_storage().and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten())
}

/// Persist the bearer token
pub fn set_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

/// Remove the bearer token
pub fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

/// Attach the bearer token header when a token is stored
fn with_auth(request: RequestBuilder) -> RequestBuilder {
    match get_token() {
        Some(token) => request.header("Authorization", &format!("Bearer {}", token)),
        None => request,
    }
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, serde::Deserialize)]
struct ValidateResponse {
    user: User,
}

#[derive(Debug, serde::Deserialize)]
struct StudentResponse {
    student: Student,
}

#[derive(Debug, serde::Deserialize)]
struct ProgressResponse {
    progress: ProgressSummary,
}

#[derive(Debug, serde::Deserialize)]
struct ActivitiesResponse {
    #[serde(default)]
    activities: Vec<Activity>,
}

#[derive(Debug, serde::Deserialize)]
struct ProblemResponse {
    success: bool,
    #[serde(default)]
    problem: Option<DailyProblem>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct SubmissionResult {
    pub is_correct: bool,
    pub feedback: String,
}

#[derive(Debug, serde::Deserialize)]
struct SubmitResponse {
    success: bool,
    #[serde(default)]
    is_correct: bool,
    #[serde(default)]
    feedback: String,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct HintResponse {
    success: bool,
    #[serde(default)]
    hint: String,
    #[serde(default)]
    error: Option<String>,
}

/// Chat message as the backend serializes it. Only the text is read;
/// the client stamps its own sender and timestamp on append.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct WireChatMessage {
    pub message: String,
}

#[derive(Debug, serde::Deserialize)]
struct ChatSessionInfo {
    id: u32,
}

#[derive(Debug, serde::Deserialize)]
struct StartChatResponse {
    success: bool,
    #[serde(default)]
    session: Option<ChatSessionInfo>,
    #[serde(default)]
    welcome_message: Option<WireChatMessage>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct SendMessageResponse {
    success: bool,
    #[serde(default)]
    tutor_response: Option<WireChatMessage>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct GamificationProgressResponse {
    progress: GamificationProgress,
}

#[derive(Debug, serde::Deserialize)]
struct LeaderboardResponse {
    #[serde(default)]
    leaderboard: Vec<LeaderboardEntry>,
}

// ============ Helpers ============

async fn error_from(response: gloo_net::http::Response) -> String {
    let error: ApiError = response.json().await.unwrap_or(ApiError {
        error: "Unknown error".to_string(),
        code: None,
    });
    error.error
}

// ============ Auth ============

/// Log in with email and password
pub async fn login(email: &str, password: &str) -> Result<AuthResponse, String> {
    #[derive(serde::Serialize)]
    struct LoginRequest {
        email: String,
        password: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/auth/login", api_base))
        .json(&LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_from(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Create a new account
pub async fn register(
    name: &str,
    email: &str,
    password: &str,
    grade: &str,
) -> Result<AuthResponse, String> {
    #[derive(serde::Serialize)]
    struct RegisterRequest {
        name: String,
        email: String,
        password: String,
        grade: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/auth/register", api_base))
        .json(&RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            grade: grade.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_from(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Validate the stored token against the backend
pub async fn validate_token() -> Result<User, String> {
    let api_base = get_api_base();

    let response = with_auth(Request::get(&format!("{}/auth/validate", api_base)))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_from(response).await);
    }

    let result: ValidateResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.user)
}

// ============ Students ============

/// Fetch a student profile
pub async fn fetch_student(student_id: u32) -> Result<Student, String> {
    let api_base = get_api_base();

    let response = with_auth(Request::get(&format!("{}/students/{}", api_base, student_id)))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_from(response).await);
    }

    let result: StudentResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.student)
}

/// Fetch a student's aggregated progress
pub async fn fetch_progress(student_id: u32) -> Result<ProgressSummary, String> {
    let api_base = get_api_base();

    let response = with_auth(Request::get(&format!(
        "{}/students/{}/progress",
        api_base, student_id
    )))
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_from(response).await);
    }

    let result: ProgressResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.progress)
}

/// Fetch a student's recent activities
pub async fn fetch_activities(student_id: u32) -> Result<Vec<Activity>, String> {
    let api_base = get_api_base();

    let response = with_auth(Request::get(&format!(
        "{}/students/{}/activities",
        api_base, student_id
    )))
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_from(response).await);
    }

    let result: ActivitiesResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.activities)
}

// ============ Problems ============

/// Fetch today's problem
pub async fn fetch_daily_problem() -> Result<DailyProblem, String> {
    let api_base = get_api_base();

    let response = with_auth(Request::get(&format!("{}/problems/today", api_base)))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_from(response).await);
    }

    let result: ProblemResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    if result.success {
        result.problem.ok_or_else(|| "Missing problem".to_string())
    } else {
        Err(result.error.unwrap_or_else(|| "Unknown error".to_string()))
    }
}

/// Submit an answer to a problem
pub async fn submit_answer(
    problem_id: u32,
    student_id: u32,
    answer: &str,
    time_spent: u32,
) -> Result<SubmissionResult, String> {
    #[derive(serde::Serialize)]
    struct SubmitRequest {
        student_id: u32,
        answer: String,
        time_spent: u32,
    }

    let api_base = get_api_base();

    let response = with_auth(Request::post(&format!(
        "{}/problems/{}/submit",
        api_base, problem_id
    )))
    .json(&SubmitRequest {
        student_id,
        answer: answer.to_string(),
        time_spent,
    })
    .map_err(|e| format!("Request build error: {}", e))?
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_from(response).await);
    }

    let result: SubmitResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    if result.success {
        Ok(SubmissionResult {
            is_correct: result.is_correct,
            feedback: result.feedback,
        })
    } else {
        Err(result.error.unwrap_or_else(|| "Unknown error".to_string()))
    }
}

/// Fetch a hint for a problem
pub async fn fetch_hint(problem_id: u32) -> Result<String, String> {
    let api_base = get_api_base();

    let response = with_auth(Request::get(&format!(
        "{}/problems/{}/hint",
        api_base, problem_id
    )))
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_from(response).await);
    }

    let result: HintResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    if result.success {
        Ok(result.hint)
    } else {
        Err(result.error.unwrap_or_else(|| "Unknown error".to_string()))
    }
}

// ============ Tutor Chat ============

/// Start a tutor chat session, returning the session id and the
/// tutor's welcome message
pub async fn start_chat(
    student_id: u32,
    problem_id: u32,
) -> Result<(u32, WireChatMessage), String> {
    #[derive(serde::Serialize)]
    struct StartChatRequest {
        student_id: u32,
        problem_id: u32,
    }

    let api_base = get_api_base();

    let response = with_auth(Request::post(&format!("{}/tutor/chat/start", api_base)))
        .json(&StartChatRequest {
            student_id,
            problem_id,
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_from(response).await);
    }

    let result: StartChatResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    if result.success {
        match (result.session, result.welcome_message) {
            (Some(session), Some(welcome)) => Ok((session.id, welcome)),
            _ => Err("Incomplete chat session response".to_string()),
        }
    } else {
        Err(result.error.unwrap_or_else(|| "Unknown error".to_string()))
    }
}

/// Send a message in an existing chat session
pub async fn send_chat_message(
    session_id: u32,
    message: &str,
) -> Result<WireChatMessage, String> {
    #[derive(serde::Serialize)]
    struct SendMessageRequest {
        message: String,
    }

    let api_base = get_api_base();

    let response = with_auth(Request::post(&format!(
        "{}/tutor/chat/{}/message",
        api_base, session_id
    )))
    .json(&SendMessageRequest {
        message: message.to_string(),
    })
    .map_err(|e| format!("Request build error: {}", e))?
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_from(response).await);
    }

    let result: SendMessageResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    if result.success {
        result
            .tutor_response
            .ok_or_else(|| "Missing tutor response".to_string())
    } else {
        Err(result.error.unwrap_or_else(|| "Unknown error".to_string()))
    }
}

// ============ Gamification ============

/// Fetch a student's gamification progress
pub async fn fetch_gamification_progress(student_id: u32) -> Result<GamificationProgress, String> {
    let api_base = get_api_base();

    let response = with_auth(Request::get(&format!(
        "{}/gamification/students/{}/progress",
        api_base, student_id
    )))
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_from(response).await);
    }

    let result: GamificationProgressResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.progress)
}

/// Fetch a student's achievements, partitioned by state
pub async fn fetch_achievements(student_id: u32) -> Result<AchievementSet, String> {
    let api_base = get_api_base();

    let response = with_auth(Request::get(&format!(
        "{}/gamification/students/{}/achievements",
        api_base, student_id
    )))
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_from(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch a student's gamification activity feed
pub async fn fetch_gamification_activities(
    student_id: u32,
    per_page: u32,
) -> Result<Vec<Activity>, String> {
    let api_base = get_api_base();

    let response = with_auth(Request::get(&format!(
        "{}/gamification/students/{}/activities?per_page={}",
        api_base, student_id, per_page
    )))
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_from(response).await);
    }

    let result: ActivitiesResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.activities)
}

/// Fetch the points leaderboard
pub async fn fetch_leaderboard(limit: u32) -> Result<Vec<LeaderboardEntry>, String> {
    let api_base = get_api_base();

    let response = with_auth(Request::get(&format!(
        "{}/gamification/leaderboard?type=points&limit={}",
        api_base, limit
    )))
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_from(response).await);
    }

    let result: LeaderboardResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.leaderboard)
}
