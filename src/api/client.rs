use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::Method;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{json, Map, Value};
use tracing::{debug, info, warn};

use crate::api::{PlanType, TokenStore};
use crate::error::{DietError, Result};
use crate::models::{CalorieTarget, Gender, MealSelections, MealSlot, Objective, PersonalProfile};
use crate::planner::validation::ValidatedInput;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Body sent to the diet generation and payment endpoints.
///
/// Serializes to the backend's form payload (`peso`, `objetivo`, `cafe`, ...).
#[derive(Debug, Clone)]
pub struct DietRequest {
    pub personal: PersonalProfile,
    pub gender: Gender,
    pub meals: MealSelections,
    pub user_id: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireRequest<'a> {
    personal: WirePersonal,
    gender: &'static str,
    meals: BTreeMap<&'static str, Vec<&'a str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<&'a str>,
}

/// Personal data as the backend's form fields, all strings.
#[derive(Serialize)]
struct WirePersonal {
    peso: String,
    altura: String,
    idade: String,
    objetivo: String,
    calorias: String,
    horarios: String,
    gender: &'static str,
}

fn gender_key(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "masculino",
        Gender::Female => "feminino",
    }
}

fn objective_key(objective: &Objective) -> &str {
    match objective {
        Objective::LoseWeight => "emagrecer",
        Objective::LoseWeightGainMuscle => "emagrecer-massa",
        Objective::DefineAndGainMuscle => "definicao-massa",
        Objective::GainMuscle => "ganhar-massa",
        Objective::Other(raw) => raw,
    }
}

fn slot_key(slot: MealSlot) -> &'static str {
    match slot {
        MealSlot::Breakfast => "cafe",
        MealSlot::MorningSnack => "lanche-manha",
        MealSlot::Lunch => "almoco",
        MealSlot::AfternoonSnack => "lanche-tarde",
        MealSlot::Dinner => "jantar",
    }
}

impl DietRequest {
    fn to_wire(&self) -> WireRequest<'_> {
        let personal = &self.personal;
        let calorias = match personal.calorie_target {
            CalorieTarget::Unspecified => "nao-sei".to_string(),
            CalorieTarget::Fixed(kcal) => kcal.to_string(),
        };

        WireRequest {
            personal: WirePersonal {
                peso: personal.weight_kg.to_string(),
                altura: personal.height_cm.to_string(),
                idade: personal.age_years.to_string(),
                objetivo: objective_key(&personal.objective).to_string(),
                calorias,
                horarios: personal.meal_times.join(","),
                gender: gender_key(self.gender),
            },
            gender: gender_key(self.gender),
            meals: MealSlot::ALL
                .into_iter()
                .map(|slot| (slot_key(slot), self.meals.foods(slot).collect()))
                .collect(),
            user_id: self.user_id.as_deref(),
        }
    }
}

impl Serialize for DietRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_wire().serialize(serializer)
    }
}

impl From<&ValidatedInput> for DietRequest {
    fn from(input: &ValidatedInput) -> Self {
        Self {
            personal: input.profile.clone(),
            gender: input.gender,
            meals: input.meals.clone(),
            user_id: None,
        }
    }
}

/// Response envelope used by every backend endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    /// Endpoint-specific top-level fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ApiResponse {
    fn failure_message(&self) -> String {
        self.error
            .clone()
            .or_else(|| self.message.clone())
            .unwrap_or_else(|| "Request failed".to_string())
    }

    /// Link to the generated PDF, if the backend returned one.
    pub fn pdf_path(&self) -> Option<&str> {
        let from_data = self
            .data
            .as_ref()
            .and_then(|d| d.get("pdfUrl").or_else(|| d.get("pdf_url")));
        from_data
            .or_else(|| self.extra.get("pdfUrl"))
            .and_then(Value::as_str)
    }
}

/// Result of a payment request.
#[derive(Debug, Clone)]
pub struct PaymentOutcome {
    pub approved: bool,
    pub response: ApiResponse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Auth {
    Bearer,
    Skip,
}

/// Blocking client for the diet backend.
pub struct ApiClient {
    base_url: String,
    http: Client,
    tokens: TokenStore,
}

impl ApiClient {
    pub fn new(base_url: &str, tokens: TokenStore) -> Result<Self> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
            tokens,
        })
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    pub fn is_authenticated(&self) -> bool {
        self.tokens.is_authenticated()
    }

    fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
        auth: Auth,
    ) -> Result<ApiResponse> {
        let url = format!("{}{}", self.base_url, endpoint);
        info!(%method, %url, "api request");

        let mut builder = self.http.request(method, &url);
        if auth == Auth::Bearer {
            if let Some(token) = self.tokens.token() {
                builder = builder.bearer_auth(token);
            }
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send()?;
        let status = response.status();
        let payload: Value = response.json()?;
        debug!(status = status.as_u16(), %payload, "api response");

        let envelope: ApiResponse = serde_json::from_value(payload)?;
        if !status.is_success() || envelope.success == Some(false) {
            warn!(status = status.as_u16(), %url, "api request failed");
            return Err(DietError::Api {
                status: status.as_u16(),
                message: envelope.failure_message(),
            });
        }

        Ok(envelope)
    }

    /// Whether the backend is up.
    pub fn health_check(&self) -> Result<ApiResponse> {
        self.request(Method::GET, "/health", None, Auth::Skip)
    }

    /// Log in and persist the returned token.
    pub fn login(&mut self, email: &str, password: &str) -> Result<ApiResponse> {
        let body = json!({ "email": email, "password": password });
        let response = self.request(Method::POST, "/auth/login", Some(&body), Auth::Skip)?;

        let data = response.data.as_ref();
        match data.and_then(|d| d.get("token")).and_then(Value::as_str) {
            Some(token) => {
                let user = data.and_then(|d| d.get("user")).cloned();
                self.tokens.save(token, user)?;
                info!("logged in");
            }
            None => warn!("login succeeded without a token"),
        }

        Ok(response)
    }

    pub fn logout(&mut self) -> Result<()> {
        self.tokens.clear()
    }

    /// Ask the backend to generate an AI diet for the request.
    ///
    /// The logged-in user's id is attached when known.
    pub fn generate_diet(&self, request: &DietRequest) -> Result<ApiResponse> {
        let mut request = request.clone();
        if request.user_id.is_none() {
            request.user_id = self.tokens.user_id();
        }
        let body = serde_json::to_value(&request)?;
        self.request(Method::POST, "/generate-diet", Some(&body), Auth::Bearer)
    }

    pub fn process_payment(
        &self,
        plan_type: PlanType,
        request: &DietRequest,
    ) -> Result<PaymentOutcome> {
        let body = json!({ "planType": plan_type, "userData": request });
        let response = self.request(Method::POST, "/process-payment", Some(&body), Auth::Bearer)?;

        let approved = response
            .extra
            .get("paymentApproved")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        info!(plan = plan_type.key(), approved, "payment processed");

        Ok(PaymentOutcome { approved, response })
    }

    /// Diets previously generated for the logged-in user.
    pub fn my_diets(&self) -> Result<ApiResponse> {
        if !self.is_authenticated() {
            return Err(DietError::NotAuthenticated);
        }
        self.request(Method::GET, "/my-diets", None, Auth::Bearer)
    }

    /// Absolute URL for a PDF link returned by the backend.
    ///
    /// Relative links are served from the host root, not under `/api`.
    pub fn pdf_url(&self, path: &str) -> String {
        if path.starts_with("http") {
            return path.to_string();
        }
        let root = self
            .base_url
            .strip_suffix("/api")
            .unwrap_or(&self.base_url);
        format!("{}{}", root, path)
    }
}
