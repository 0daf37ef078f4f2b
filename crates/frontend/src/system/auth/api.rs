use contracts::system::auth::{
    LoginRequest, LoginResponse, SignupRequest, SignupResponse, UserInfo, VerifyResponse,
};

use crate::shared::api::{ApiClient, ApiError, ApiRequest};

/// Exchange credentials for a token and profile
pub async fn login(client: &ApiClient, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    client
        .fetch(ApiRequest::post("/auth/login").json(request)?)
        .await
}

pub async fn signup(
    client: &ApiClient,
    request: &SignupRequest,
) -> Result<SignupResponse, ApiError> {
    client
        .fetch(ApiRequest::post("/auth/signup").json(request)?)
        .await
}

/// Check a stored token; the server answers with the current profile
pub async fn verify(client: &ApiClient, token: &str) -> Result<UserInfo, ApiError> {
    let response: VerifyResponse = client
        .fetch(ApiRequest::get("/auth/verify").bearer(token))
        .await?;
    Ok(response.user)
}

pub async fn logout(client: &ApiClient, token: &str) -> Result<(), ApiError> {
    client
        .execute(ApiRequest::post("/auth/logout").bearer(token))
        .await
}
