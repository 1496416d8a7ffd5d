use hemogate_auth::{Claims, TokenVerifier, VerificationError};
use hemogate_config::{AccessConfig, JwtConfig};
use tracing::trace;

use crate::decision::{AccessDecision, AccessPolicy};
use crate::routes::{RouteClass, RouteClassifier};

/// Classifier, verifier and policy wired together.
///
/// Immutable after construction; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct AccessGate {
    classifier: RouteClassifier,
    verifier: TokenVerifier,
    policy: AccessPolicy,
}

/// Full result of evaluating one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub class: RouteClass,
    pub decision: AccessDecision,
    /// Verified claims, present only when the request is allowed and the
    /// credential was checked.
    pub claims: Option<Claims>,
}

impl AccessGate {
    pub fn new(access_config: &AccessConfig, jwt_config: &JwtConfig) -> Self {
        Self::from_parts(
            RouteClassifier::new(access_config),
            TokenVerifier::new(jwt_config),
            AccessPolicy::new(access_config),
        )
    }

    pub fn from_parts(
        classifier: RouteClassifier,
        verifier: TokenVerifier,
        policy: AccessPolicy,
    ) -> Self {
        Self {
            classifier,
            verifier,
            policy,
        }
    }

    /// Decision for `path`, using the path itself as the login return target.
    pub fn evaluate(&self, path: &str, credential: Option<&str>) -> AccessDecision {
        self.inspect(path, path, credential).decision
    }

    /// Classifies `path`, verifies the credential when the class needs it,
    /// and applies the policy. `return_to` is what the login page should
    /// forward to afterwards (usually path plus query).
    pub fn inspect(&self, path: &str, return_to: &str, credential: Option<&str>) -> Evaluation {
        let class = self.classifier.classify(path);

        if class == RouteClass::Public {
            return Evaluation {
                class,
                decision: AccessDecision::Allow,
                claims: None,
            };
        }

        let verification: Result<Claims, VerificationError> = self.verifier.verify(credential);
        let decision = self.policy.decide(class, &verification, return_to);
        trace!(class = %class, allowed = decision.is_allowed(), "Access evaluated");

        let claims = match (&decision, verification) {
            (AccessDecision::Allow, Ok(claims)) => Some(claims),
            _ => None,
        };

        Evaluation {
            class,
            decision,
            claims,
        }
    }
}
