use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, AppResult},
    middleware::{ClientSession, RequestId},
    models::{
        GlobalBaseline, Peer, PlanDetails, ProfileStats, RecommendationBundle, StatDelta, UserId,
        UserView,
    },
    services::{recommendations, ProfileAggregator, Session, SessionStore, SessionToken},
};

use super::{state::AppStateInner, AppState};

const MIN_AGE: i64 = 10;
const MAX_AGE: i64 = 100;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub age: i64,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub token: SessionToken,
    pub session: Session,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: SessionToken,
    pub session: Session,
    pub user: UserView,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: UserView,
    pub stats: ProfileStats,
    pub baseline: GlobalBaseline,
    pub delta: StatDelta,
}

impl RegisterRequest {
    /// Bounds from the sign-up form; the secret itself is not checked
    fn validate(&self) -> AppResult<u8> {
        if self.name.trim().is_empty() {
            return Err(AppError::InvalidInput("name must not be empty".to_string()));
        }
        if self.email.trim().is_empty() {
            return Err(AppError::InvalidInput("email must not be empty".to_string()));
        }
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(AppError::InvalidInput(format!(
                "age must be between {} and {}",
                MIN_AGE, MAX_AGE
            )));
        }
        u8::try_from(self.age).map_err(|e| AppError::InvalidInput(e.to_string()))
    }
}

/// Resolves the authenticated user behind a token
fn authenticated_user(sessions: &SessionStore, client: &ClientSession) -> AppResult<UserId> {
    sessions.get(&client.0)?.require_user()
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Open a new anonymous session
pub async fn open_session(State(state): State<AppState>) -> (StatusCode, Json<SessionResponse>) {
    let mut inner = state.inner.write().await;
    let token = inner.sessions.open();

    (
        StatusCode::CREATED,
        Json(SessionResponse {
            token,
            session: Session::Anonymous,
        }),
    )
}

/// Current state of the caller's session
pub async fn get_session(
    State(state): State<AppState>,
    client: ClientSession,
) -> AppResult<Json<SessionResponse>> {
    let inner = state.inner.read().await;
    let session = inner.sessions.get(&client.0)?;

    Ok(Json(SessionResponse {
        token: client.0,
        session,
    }))
}

/// Log in on the caller's session, or on a new one when the token is
/// missing or no longer live
pub async fn login(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    client: Option<ClientSession>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    tracing::info!(request_id = %request_id, email = %request.email, "Processing login");

    let mut inner = state.inner.write().await;
    let AppStateInner { accounts, sessions } = &mut *inner;

    // Stale or closed tokens fall through to a fresh session
    let live = client.filter(|c| sessions.get(&c.0).is_ok());

    let (token, user) = match live {
        Some(ClientSession(token)) => {
            let user = sessions
                .get_mut(&token)?
                .login(&*accounts, &request.email, &request.password)?;
            (token, user)
        }
        None => {
            // Only keep the session if the login succeeds
            let mut session = Session::default();
            let user = session.login(&*accounts, &request.email, &request.password)?;
            (sessions.insert(session), user)
        }
    };

    Ok(Json(LoginResponse {
        token,
        session: Session::Authenticated(user.id),
        user: UserView::from(&user),
    }))
}

/// Log out and close the caller's session; the token is dead afterwards
pub async fn logout(
    State(state): State<AppState>,
    client: ClientSession,
) -> Json<SessionResponse> {
    let mut inner = state.inner.write().await;
    let session = inner.sessions.logout(&client.0);

    Json(SessionResponse {
        token: client.0,
        session,
    })
}

/// Create a new account
pub async fn register(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<UserView>)> {
    let age = request.validate()?;

    tracing::info!(
        request_id = %request_id,
        email = %request.email,
        "Processing registration"
    );

    let mut inner = state.inner.write().await;
    let user = inner
        .accounts
        .register(request.name, request.email, request.password, age)?;

    Ok((StatusCode::CREATED, Json(UserView::from(&user))))
}

/// Mean rating and watch progress over all users
pub async fn global_stats(State(state): State<AppState>) -> Json<GlobalBaseline> {
    let inner = state.inner.read().await;
    let aggregator = ProfileAggregator::new(&state.catalog, &inner.accounts);
    Json(aggregator.global_baseline())
}

/// Profile, stats and comparison with the global baseline
pub async fn my_profile(
    State(state): State<AppState>,
    client: ClientSession,
) -> AppResult<Json<ProfileResponse>> {
    let inner = state.inner.read().await;
    let user_id = authenticated_user(&inner.sessions, &client)?;
    let user = UserView::from(inner.accounts.get(user_id)?);

    let aggregator = ProfileAggregator::new(&state.catalog, &inner.accounts);
    let stats = aggregator.compute_stats(user_id)?;
    let baseline = aggregator.global_baseline();
    let delta = StatDelta::between(&stats, &baseline);

    Ok(Json(ProfileResponse {
        user,
        stats,
        baseline,
        delta,
    }))
}

/// Subscription details, `null` when the account has none
pub async fn my_plan(
    State(state): State<AppState>,
    client: ClientSession,
) -> AppResult<Json<Option<PlanDetails>>> {
    let inner = state.inner.read().await;
    let user_id = authenticated_user(&inner.sessions, &client)?;
    let plan = ProfileAggregator::new(&state.catalog, &inner.accounts).plan_details(user_id)?;
    Ok(Json(plan))
}

/// Curated recommendation bundle
pub async fn my_recommendations(
    State(state): State<AppState>,
    client: ClientSession,
) -> AppResult<Json<RecommendationBundle>> {
    let user_id = {
        let inner = state.inner.read().await;
        authenticated_user(&inner.sessions, &client)?
    };
    let bundle = recommendations::bundle_for(&state.catalog, user_id)?;
    Ok(Json(bundle))
}

/// Users sharing the caller's favourite genre
pub async fn my_peers(
    State(state): State<AppState>,
    client: ClientSession,
) -> AppResult<Json<Vec<Peer>>> {
    let inner = state.inner.read().await;
    let user_id = authenticated_user(&inner.sessions, &client)?;
    let peers = ProfileAggregator::new(&state.catalog, &inner.accounts).peers(user_id)?;
    Ok(Json(peers))
}
