//! Referral Rewards API Client
//!
//! Talks to the server's JSON endpoints. The base URL includes the route
//! prefix, e.g. `http://localhost:5000/api`.

use anyhow::{anyhow, Context, Result};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct SignupRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct AuthUser {
    pub id: u32,
    pub name: String,
    pub email: String,
}

/// Login and signup response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default)]
    pub user: Option<AuthUser>,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct RewardStatus {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub unlocked: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub referral_code: String,
    pub total_donations: u64,
    pub rewards: Vec<RewardStatus>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub id: u32,
    pub name: String,
    pub referral_code: String,
    pub total_donations: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardStats {
    pub participants: usize,
    pub total_donations: u64,
    pub average_donation: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardDefinition {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub requirement: String,
    #[serde(default)]
    pub donation_threshold: Option<u64>,
}

#[derive(Debug, Serialize)]
struct DonationRequest {
    amount: u64,
}

/// Referral Rewards API client
pub struct ReferralClient {
    client: Client,
    base_url: String,
}

impl ReferralClient {
    pub fn new(base_url: &str) -> Self {
        // Build HTTP client with timeout, falling back to default client if builder fails
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get_user(&self, id: u32) -> Result<UserResponse> {
        let resp = self.client.get(self.api_url(&format!("user/{}", id))).send().await?;
        expect_json(resp, "fetch user").await
    }

    pub async fn get_leaderboard(&self, limit: Option<usize>) -> Result<Vec<LeaderboardEntry>> {
        let path = match limit {
            Some(limit) => format!("leaderboard?limit={}", limit),
            None => "leaderboard".to_string(),
        };
        let resp = self.client.get(self.api_url(&path)).send().await?;
        expect_json(resp, "fetch leaderboard").await
    }

    pub async fn get_stats(&self) -> Result<LeaderboardStats> {
        let resp = self.client.get(self.api_url("leaderboard/stats")).send().await?;
        expect_json(resp, "fetch stats").await
    }

    pub async fn get_rewards(&self) -> Result<Vec<RewardDefinition>> {
        let resp = self.client.get(self.api_url("rewards")).send().await?;
        expect_json(resp, "fetch rewards").await
    }

    pub async fn donate(&self, id: u32, amount: u64) -> Result<UserResponse> {
        let resp = self
            .client
            .post(self.api_url(&format!("user/{}/donations", id)))
            .json(&DonationRequest { amount })
            .send()
            .await?;
        expect_json(resp, "record donation").await
    }

    pub async fn login(&self, request: &LoginRequest<'_>) -> Result<AuthResponse> {
        let resp = self.client.post(self.api_url("login")).json(request).send().await?;
        auth_response(resp).await
    }

    pub async fn signup(&self, request: &SignupRequest<'_>) -> Result<AuthResponse> {
        let resp = self.client.post(self.api_url("signup")).json(request).send().await?;
        auth_response(resp).await
    }
}

async fn expect_json<T: DeserializeOwned>(resp: Response, action: &str) -> Result<T> {
    let status = resp.status();
    if status.is_success() {
        resp.json()
            .await
            .with_context(|| format!("Invalid response while trying to {}", action))
    } else {
        let error_text = resp.text().await.unwrap_or_else(|_| "Unknown error".into());
        Err(anyhow!("Failed to {} ({}): {}", action, status, error_text))
    }
}

/// Rejected logins and signups still carry a JSON body with a message
async fn auth_response(resp: Response) -> Result<AuthResponse> {
    let status = resp.status();
    let text = resp.text().await?;
    serde_json::from_str(&text)
        .map_err(|_| anyhow!("Unexpected response ({}): {}", status, text))
}
