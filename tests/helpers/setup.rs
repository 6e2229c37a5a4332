use chrono::Utc;
use flock_api::Application;
use flock_infra::{Config, FlockContext};
use flock_sdk::FlockSDK;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::Serialize;

pub struct TestApp {
    pub config: Config,
    pub address: String,
}

#[derive(Serialize)]
struct TestPolicy {
    allow: Vec<String>,
}

#[derive(Serialize)]
struct TestClaims {
    exp: usize,
    sub: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    policy: Option<TestPolicy>,
}

impl TestApp {
    /// A token allowed to do everything
    pub fn admin_token(&self) -> String {
        self.token(Some(vec!["*".into()]))
    }

    /// A token without a policy, which only grants read access
    pub fn read_only_token(&self) -> String {
        self.token(None)
    }

    pub fn token(&self, allow: Option<Vec<String>>) -> String {
        let claims = TestClaims {
            exp: (Utc::now().timestamp() + 60 * 60) as usize,
            sub: "pastor".into(),
            policy: allow.map(|allow| TestPolicy { allow }),
        };
        let key = EncodingKey::from_secret(self.config.jwt_secret.as_bytes());
        encode(&Header::default(), &claims, &key).expect("Expected to encode token")
    }

    pub fn sdk(&self, token: String) -> FlockSDK {
        FlockSDK::new(self.address.clone(), token)
    }
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, FlockSDK) {
    let mut ctx = FlockContext::create_inmemory();
    ctx.config.port = 0; // Random port

    let config = ctx.config.clone();
    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}/api/v1", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp { config, address };
    let sdk = app.sdk(app.admin_token());
    (app, sdk)
}
