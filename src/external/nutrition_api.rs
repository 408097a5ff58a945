// ABOUTME: Nutrition API client for food nutrition queries and search suggestions
// ABOUTME: Implements bearer auth, request IDs, response caching, rate limiting, and an in-memory mock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilens Contributors

//! Nutrition API Client
//!
//! Typed client for the nutrition backend:
//!
//! - `GET {base}/api/nutrition?query=&quantity=&unit=` returns a
//!   [`NutritionQueryResult`] scaled to the requested serving
//! - `GET {base}/api/search?query=` returns [`FoodSuggestion`] records
//! - `GET {base}/api/auth/verify` checks the bearer token
//!
//! Every request carries an `x-request-id` header. Error statuses map to
//! error codes: 401 is `AuthExpired`, 404 is `ResourceNotFound`, 429 is
//! `ExternalRateLimited`, anything else is `ExternalServiceError` with the
//! status under `details.status`.
//!
//! Responses are cached per query until `cache_ttl_secs` elapses; expired
//! entries are pruned whenever a new entry is stored.
//!
//! # Example
//! ```rust,no_run
//! use nutrilens::config::NutritionApiConfig;
//! use nutrilens::external::{NutritionApiClient, NutritionDataSource};
//! use nutrilens::models::ServingUnit;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = NutritionApiClient::new(NutritionApiConfig::default())?;
//! let result = client.fetch_nutrition("apple", 150.0, ServingUnit::Grams).await?;
//! println!("{} kcal", result.calories);
//! # Ok(())
//! # }
//! ```

use crate::config::NutritionApiConfig;
use crate::constants::service_names;
use crate::constants::servings::REFERENCE_QUANTITY;
use crate::errors::{AppError, AppResult};
use crate::intelligence::{AllergenDetector, ServingRules};
use crate::logging::AppLogger;
use crate::models::{FoodSuggestion, NutritionQueryResult, ServingUnit};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tokio::time::sleep;
use tracing::debug;
use uuid::Uuid;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Source of nutrition data and search suggestions
#[async_trait]
pub trait NutritionDataSource: Send + Sync {
    /// Nutrition values for `query` at the requested serving
    async fn fetch_nutrition(
        &self,
        query: &str,
        quantity: f64,
        unit: ServingUnit,
    ) -> AppResult<NutritionQueryResult>;

    /// Foods whose names contain every word of `query`
    async fn search_foods(&self, query: &str) -> AppResult<Vec<FoodSuggestion>>;

    /// Whether the configured credentials are accepted
    async fn verify_token(&self) -> AppResult<bool>;
}

/// Error body returned by the API on failure
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<String>,
}

/// Body of the token verification endpoint
#[derive(Debug, Deserialize)]
struct VerifyResponse {
    #[serde(default = "default_authenticated")]
    authenticated: bool,
}

const fn default_authenticated() -> bool {
    true
}

/// Cache entry with expiration
#[derive(Debug, Clone)]
struct CacheEntry<T> {
    data: T,
    expires_at: Instant,
}

/// Sliding-window rate limiter for outbound requests
#[derive(Debug)]
struct RateLimiter {
    requests: Vec<Instant>,
    limit: u32,
    window: Duration,
}

impl RateLimiter {
    const fn new(limit: u32, window: Duration) -> Self {
        Self {
            requests: Vec::new(),
            limit,
            window,
        }
    }

    fn can_request(&mut self) -> bool {
        let now = Instant::now();
        self.requests
            .retain(|&t| now.duration_since(t) < self.window);
        self.requests.len() < self.limit as usize
    }

    fn record_request(&mut self) {
        self.requests.push(Instant::now());
    }

    async fn wait_if_needed(&mut self) {
        while !self.can_request() {
            sleep(Duration::from_millis(250)).await;
        }
    }
}

type Cache<T> = Arc<RwLock<HashMap<String, CacheEntry<T>>>>;

async fn cached<T: Clone>(cache: &Cache<T>, key: &str) -> Option<T> {
    let cache = cache.read().await;
    cache
        .get(key)
        .filter(|entry| Instant::now() < entry.expires_at)
        .map(|entry| entry.data.clone())
}

async fn store<T>(cache: &Cache<T>, key: String, data: T, expires_at: Instant) {
    let mut cache = cache.write().await;
    let now = Instant::now();
    cache.retain(|_, entry| entry.expires_at > now);
    cache.insert(key, CacheEntry { data, expires_at });
}

/// HTTP client for the nutrition API
pub struct NutritionApiClient {
    config: NutritionApiConfig,
    http_client: reqwest::Client,
    nutrition_cache: Cache<NutritionQueryResult>,
    search_cache: Cache<Vec<FoodSuggestion>>,
    rate_limiter: Arc<RwLock<RateLimiter>>,
}

impl NutritionApiClient {
    /// Create a client
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when the configuration fails validation and
    /// `ConfigError` if the HTTP client cannot be built
    pub fn new(config: NutritionApiConfig) -> AppResult<Self> {
        config.validate()?;
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::config(format!("Failed to build HTTP client: {e}")))?;
        let rate_limiter = RateLimiter::new(config.rate_limit_per_minute, Duration::from_secs(60));

        Ok(Self {
            config,
            http_client,
            nutrition_cache: Arc::new(RwLock::new(HashMap::new())),
            search_cache: Arc::new(RwLock::new(HashMap::new())),
            rate_limiter: Arc::new(RwLock::new(rate_limiter)),
        })
    }

    /// Client configuration
    #[must_use]
    pub const fn config(&self) -> &NutritionApiConfig {
        &self.config
    }

    /// Clear both response caches
    pub async fn clear_caches(&self) {
        self.nutrition_cache.write().await.clear();
        self.search_cache.write().await.clear();
    }

    /// Number of cached (nutrition, search) entries
    pub async fn cache_stats(&self) -> (usize, usize) {
        let nutrition_count = self.nutrition_cache.read().await.len();
        let search_count = self.search_cache.read().await.len();
        (nutrition_count, search_count)
    }

    fn cache_expiry(&self) -> Instant {
        Instant::now() + Duration::from_secs(self.config.cache_ttl_secs)
    }

    /// Send a GET request with auth, accept, and request-id headers
    async fn get(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> AppResult<(reqwest::Response, String)> {
        {
            let mut limiter = self.rate_limiter.write().await;
            limiter.wait_if_needed().await;
            limiter.record_request();
        }

        let request_id = Uuid::new_v4().to_string();
        let url = format!("{}{path}", self.config.base_url);
        let mut request = self
            .http_client
            .get(&url)
            .query(query)
            .header(ACCEPT, "application/json")
            .header(REQUEST_ID_HEADER, &request_id);
        if let Some(token) = &self.config.token {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        let started = Instant::now();
        let response = request.send().await.map_err(|e| {
            let error = if e.is_timeout() || e.is_connect() {
                AppError::external_unavailable(service_names::NUTRITION_API, &e)
            } else {
                AppError::external_service(service_names::NUTRITION_API, &e)
            };
            error.with_request_id(&request_id)
        })?;

        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        AppLogger::log_api_request(
            "GET",
            path,
            response.status().as_u16(),
            duration_ms,
            Some(&request_id),
        );
        Ok((response, request_id))
    }

    /// Turn a non-success response into an error
    async fn error_from_response(response: reqwest::Response, request_id: &str) -> AppError {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return AppError::auth_expired().with_request_id(request_id);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .and_then(|parsed| parsed.error)
            .unwrap_or_else(|| format!("HTTP {status}"));
        let error = match status {
            StatusCode::NOT_FOUND => AppError::not_found(message),
            StatusCode::TOO_MANY_REQUESTS => {
                AppError::external_rate_limited(service_names::NUTRITION_API, message)
            }
            _ => AppError::external_service(service_names::NUTRITION_API, message),
        };
        error
            .with_details(json!({ "status": status.as_u16() }))
            .with_request_id(request_id)
    }

    async fn parse_json<T: DeserializeOwned>(
        response: reqwest::Response,
        request_id: &str,
    ) -> AppResult<T> {
        response.json().await.map_err(|e| {
            AppError::external_service(service_names::NUTRITION_API, format!("JSON parse error: {e}"))
                .with_request_id(request_id)
        })
    }
}

#[async_trait]
impl NutritionDataSource for NutritionApiClient {
    async fn fetch_nutrition(
        &self,
        query: &str,
        quantity: f64,
        unit: ServingUnit,
    ) -> AppResult<NutritionQueryResult> {
        let query = query.trim();
        validate_query(query, quantity)?;

        let cache_key = format!("{}|{quantity}|{unit}", query.to_lowercase());
        if let Some(result) = cached(&self.nutrition_cache, &cache_key).await {
            debug!(query, "Nutrition cache hit");
            return Ok(result);
        }

        let (response, request_id) = self
            .get(
                "/api/nutrition",
                &[
                    ("query", query.to_owned()),
                    ("quantity", quantity.to_string()),
                    ("unit", unit.as_str().to_owned()),
                ],
            )
            .await?;
        if !response.status().is_success() {
            return Err(Self::error_from_response(response, &request_id).await);
        }
        let result: NutritionQueryResult = Self::parse_json(response, &request_id).await?;

        store(
            &self.nutrition_cache,
            cache_key,
            result.clone(),
            self.cache_expiry(),
        )
        .await;

        Ok(result)
    }

    async fn search_foods(&self, query: &str) -> AppResult<Vec<FoodSuggestion>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let cache_key = query.to_lowercase();
        if let Some(suggestions) = cached(&self.search_cache, &cache_key).await {
            debug!(query, "Search cache hit");
            return Ok(suggestions);
        }

        let (response, request_id) = self
            .get("/api/search", &[("query", query.to_owned())])
            .await?;
        if !response.status().is_success() {
            return Err(Self::error_from_response(response, &request_id).await);
        }
        let suggestions: Vec<FoodSuggestion> = Self::parse_json(response, &request_id).await?;

        store(
            &self.search_cache,
            cache_key,
            suggestions.clone(),
            self.cache_expiry(),
        )
        .await;

        Ok(suggestions)
    }

    async fn verify_token(&self) -> AppResult<bool> {
        if self.config.token.is_none() {
            return Ok(false);
        }

        let (response, request_id) = self.get("/api/auth/verify", &[]).await?;
        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Ok(false),
            status if status.is_success() => {
                let body: VerifyResponse = Self::parse_json(response, &request_id).await?;
                Ok(body.authenticated)
            }
            _ => Err(Self::error_from_response(response, &request_id).await),
        }
    }
}

fn validate_query(query: &str, quantity: f64) -> AppResult<()> {
    if query.is_empty() {
        return Err(AppError::missing_field("Query parameter is required"));
    }
    if !(quantity.is_finite() && quantity > 0.0) {
        return Err(AppError::invalid_input("Quantity must be positive"));
    }
    Ok(())
}

/// In-memory nutrition source for tests (no network calls)
///
/// Stores per-100 reference values and answers queries the way the backend
/// does: every query word must appear in the food name, an exact name match is
/// preferred, the unit is validated against the food, values are scaled to
/// the serving, and allergens are detected from the name.
pub struct MockNutritionApi {
    foods: Vec<NutritionQueryResult>,
    rules: ServingRules,
    detector: AllergenDetector,
    authenticated: bool,
}

impl MockNutritionApi {
    /// Create a mock with a small built-in food list
    #[must_use]
    pub fn new() -> Self {
        let foods = vec![
            NutritionQueryResult::new("Masala Dosa", 188.0, 4.5, 35.7, 3.2, 2.8)
                .with_measured_ph(6.2)
                .with_health_benefits(vec![
                    "Good source of carbohydrates".into(),
                    "Contains fermented ingredients".into(),
                ]),
            NutritionQueryResult::new("Oolong Tea", 1.0, 0.0, 0.2, 0.0, 0.0)
                .with_measured_ph(5.8)
                .with_health_benefits(vec![
                    "Rich in antioxidants".into(),
                    "Supports metabolism".into(),
                ]),
            NutritionQueryResult::new("Butter Chicken", 325.0, 28.0, 8.5, 22.0, 2.1)
                .with_measured_ph(5.9)
                .with_health_benefits(vec![
                    "High in protein".into(),
                    "Contains healthy fats".into(),
                ]),
            NutritionQueryResult::new("Greek Salad", 130.0, 4.5, 7.8, 10.2, 3.5)
                .with_measured_ph(4.5)
                .with_health_benefits(vec!["Rich in vitamins".into()]),
            NutritionQueryResult::new("Quinoa Bowl", 280.0, 12.0, 45.0, 8.0, 6.0)
                .with_measured_ph(6.5)
                .with_health_benefits(vec![
                    "Complete protein source".into(),
                    "High in fiber".into(),
                ]),
            NutritionQueryResult::new("Orange Juice", 45.0, 0.7, 10.4, 0.2, 0.2)
                .with_health_benefits(vec!["High in vitamin C".into()]),
            NutritionQueryResult::new("Boiled Egg", 155.0, 12.6, 1.1, 10.6, 0.0),
            NutritionQueryResult::new("Apple", 52.0, 0.3, 13.8, 0.2, 2.4),
        ];
        Self::with_foods(foods)
    }

    /// Create a mock with custom per-100 reference foods
    #[must_use]
    pub fn with_foods(foods: Vec<NutritionQueryResult>) -> Self {
        Self {
            foods,
            rules: ServingRules::default(),
            detector: AllergenDetector::default(),
            authenticated: true,
        }
    }

    /// Make [`NutritionDataSource::verify_token`] report `authenticated`
    #[must_use]
    pub const fn with_authenticated(mut self, authenticated: bool) -> Self {
        self.authenticated = authenticated;
        self
    }

    fn matches<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a NutritionQueryResult> {
        let words: Vec<String> = query
            .to_lowercase()
            .split_whitespace()
            .map(str::to_owned)
            .collect();
        self.foods.iter().filter(move |food| {
            let name = food.name.to_lowercase();
            words.iter().all(|word| name.contains(word.as_str()))
        })
    }
}

impl Default for MockNutritionApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NutritionDataSource for MockNutritionApi {
    async fn fetch_nutrition(
        &self,
        query: &str,
        quantity: f64,
        unit: ServingUnit,
    ) -> AppResult<NutritionQueryResult> {
        if !self.authenticated {
            return Err(AppError::auth_expired());
        }
        let query = query.trim();
        validate_query(query, quantity)?;

        let matches: Vec<&NutritionQueryResult> = self.matches(query).collect();
        let food = matches
            .iter()
            .find(|food| food.name.eq_ignore_ascii_case(query))
            .or_else(|| matches.first())
            .ok_or_else(|| AppError::not_found(format!("No food found matching '{query}'")))?;

        let (quantity, _unit) = self.rules.normalize_quantity(&food.name, quantity, unit)?;
        let mut scaled = ServingRules::scale_to_quantity(food, quantity)?;
        scaled.allergens = self.detector.detect(&food.name);
        Ok(scaled)
    }

    async fn search_foods(&self, query: &str) -> AppResult<Vec<FoodSuggestion>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self
            .matches(query)
            .map(|food| FoodSuggestion {
                name: food.name.clone(),
                calories: Some(food.calories),
                serving_size: Some(REFERENCE_QUANTITY),
                serving_unit: Some(self.rules.required_unit(&food.name).to_string()),
            })
            .collect())
    }

    async fn verify_token(&self) -> AppResult<bool> {
        Ok(self.authenticated)
    }
}
