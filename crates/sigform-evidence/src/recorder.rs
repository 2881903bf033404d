// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Signature evidence recorder.
//
// Capture order: instant, environment snapshot, integrity digest, device
// fingerprint. The digest call is the only await point, and its failure
// degrades to the `unknown` sentinel so signing is never blocked.

use std::sync::Arc;

use chrono::SecondsFormat;
use sigform_bridge::{
    Clock, DigestProvider, EnvironmentProvider, SystemClock, host_environment, snapshot,
};
use sigform_core::config::{EvidenceConfig, SigformConfig};
use sigform_core::error::{Result, SigformError};
use sigform_core::{EnvironmentContext, SignatureEvidence, UNKNOWN};
use tracing::{debug, error, instrument};

use crate::audit;
use crate::fingerprint::device_fingerprint;
use crate::integrity::{Sha256Digest, integrity_input};
use crate::validation::{self, ValidationReport};

/// Captures, validates, and renders signature evidence.
///
/// Holds only shared, read-only collaborators; one recorder can serve any
/// number of signature actions.
pub struct SignatureEvidenceRecorder {
    environment: Arc<dyn EnvironmentProvider>,
    digest: Arc<dyn DigestProvider>,
    clock: Arc<dyn Clock>,
    config: EvidenceConfig,
}

impl SignatureEvidenceRecorder {
    pub fn new(environment: Arc<dyn EnvironmentProvider>, digest: Arc<dyn DigestProvider>) -> Self {
        Self {
            environment,
            digest,
            clock: Arc::new(SystemClock),
            config: EvidenceConfig::default(),
        }
    }

    /// Recorder wired to the host process environment and in-process SHA-256.
    pub fn host() -> Self {
        Self::new(Arc::from(host_environment()), Arc::new(Sha256Digest))
    }

    /// Host recorder using the evidence section of a pipeline config.
    pub fn from_config(config: &SigformConfig) -> Self {
        Self::host().with_config(config.evidence.clone())
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_config(mut self, config: EvidenceConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &EvidenceConfig {
        &self.config
    }

    /// Capture the evidence for one signature action.
    ///
    /// Always returns a record. If the digest provider fails, the record's
    /// `integrity_digest` is `unknown` and an error is logged.
    #[instrument(skip_all, fields(signature_len = signature_value.len(), algorithm = self.digest.algorithm()))]
    pub async fn capture(&self, signature_value: &str) -> SignatureEvidence {
        let timestamp = self
            .clock
            .now()
            .to_rfc3339_opts(SecondsFormat::Millis, true);
        let env = snapshot(self.environment.as_ref());

        let integrity_digest = match self.compute_digest(signature_value, &timestamp).await {
            Ok(digest) => digest,
            Err(e) => {
                error!(error = %e, "integrity digest unavailable, recording sentinel");
                UNKNOWN.to_owned()
            }
        };

        let device_fingerprint = device_fingerprint(&env);

        debug!(%timestamp, "signature evidence captured");
        SignatureEvidence {
            timestamp,
            signer_identity: signature_value.to_owned(),
            consent_given: true,
            integrity_digest,
            environment: EnvironmentContext {
                user_agent: env.user_agent,
                screen_width: env.screen_width,
                screen_height: env.screen_height,
                timezone: env.timezone,
            },
            device_fingerprint,
            origin_address: String::new(),
        }
    }

    /// Check `evidence` against this recorder's validation policy.
    pub fn validate(&self, evidence: &SignatureEvidence) -> ValidationReport {
        validation::validate(evidence, &self.config)
    }

    /// Render `evidence` as its canonical audit-trail block.
    pub fn format_for_audit(&self, evidence: &SignatureEvidence) -> String {
        audit::format_for_audit(evidence)
    }

    /// Recompute the digest over the record's signer and timestamp and
    /// compare it with the stored one.
    ///
    /// Fails with `IntegrityMismatch` if either field was altered after
    /// capture, and with `DigestUnavailable` if the record holds the
    /// sentinel or the provider cannot digest.
    #[instrument(skip_all)]
    pub async fn verify_integrity(&self, evidence: &SignatureEvidence) -> Result<()> {
        if !evidence.has_verifiable_digest() {
            return Err(SigformError::DigestUnavailable(
                "record carries no computed digest".into(),
            ));
        }

        let actual = self
            .compute_digest(&evidence.signer_identity, &evidence.timestamp)
            .await?;
        if actual == evidence.integrity_digest {
            debug!("integrity digest verified");
            Ok(())
        } else {
            Err(SigformError::IntegrityMismatch {
                expected: evidence.integrity_digest.clone(),
                actual,
            })
        }
    }

    async fn compute_digest(&self, signer_identity: &str, timestamp: &str) -> Result<String> {
        let bytes = self
            .digest
            .digest(&integrity_input(signer_identity, timestamp))
            .await
            .map_err(|e| match e {
                e @ SigformError::DigestUnavailable(_) => e,
                other => SigformError::DigestUnavailable(other.to_string()),
            })?;

        if bytes.is_empty() {
            return Err(SigformError::DigestUnavailable(format!(
                "{} returned an empty digest",
                self.digest.algorithm()
            )));
        }
        Ok(hex::encode(bytes))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::RwLock;

    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use sha2::{Digest, Sha256};
    use sigform_bridge::{FixedClock, HostEnvironment, StaticEnvironment, UnavailableDigest};

    use super::*;
    use crate::validation::EvidenceDefect;

    const INSTANT: &str = "2026-03-01T09:30:00.250Z";

    fn browser() -> Arc<StaticEnvironment> {
        Arc::new(StaticEnvironment {
            user_agent: Some("Mozilla/5.0 (Macintosh)".into()),
            screen_size: Some((1440, 900)),
            timezone: Some("Europe/London".into()),
            locale: Some("en-GB".into()),
            platform: Some("MacIntel".into()),
            timezone_offset_minutes: Some(0),
        })
    }

    fn clock() -> Arc<FixedClock> {
        let instant = Utc
            .with_ymd_and_hms(2026, 3, 1, 9, 30, 0)
            .unwrap()
            + chrono::Duration::milliseconds(250);
        Arc::new(FixedClock(instant))
    }

    fn recorder(digest: Arc<dyn DigestProvider>) -> SignatureEvidenceRecorder {
        SignatureEvidenceRecorder::new(browser(), digest).with_clock(clock())
    }

    /// Digest provider that returns nothing.
    struct EmptyDigest;

    #[async_trait]
    impl DigestProvider for EmptyDigest {
        fn algorithm(&self) -> &str {
            "empty"
        }

        async fn digest(&self, _data: &[u8]) -> Result<Vec<u8>> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn capture_assembles_complete_record() {
        let evidence = recorder(Arc::new(Sha256Digest)).capture("Jane Doe").await;

        assert_eq!(evidence.timestamp, INSTANT);
        assert_eq!(evidence.signer_identity, "Jane Doe");
        assert!(evidence.consent_given);
        assert_eq!(
            evidence.integrity_digest,
            hex::encode(Sha256::digest(format!("Jane Doe{INSTANT}").as_bytes()))
        );
        assert_eq!(evidence.environment.user_agent, "Mozilla/5.0 (Macintosh)");
        assert_eq!(evidence.environment.screen_resolution(), "1440x900");
        assert_eq!(evidence.environment.timezone, "Europe/London");
        assert_eq!(evidence.device_fingerprint, "en-GB|MacIntel|0|1296000");
        assert_eq!(evidence.origin_address, "");
    }

    #[tokio::test]
    async fn captured_record_validates() {
        let recorder = recorder(Arc::new(Sha256Digest));
        let evidence = recorder.capture("Jane Doe").await;
        let report = recorder.validate(&evidence);
        assert!(report.valid, "{:?}", report.errors);
        assert!(report.errors.is_empty());
    }

    #[tokio::test]
    async fn host_recorder_captures_valid_evidence() {
        let recorder = SignatureEvidenceRecorder::host();
        let evidence = recorder.capture("Jane Doe").await;
        assert!(recorder.validate(&evidence).valid);
        assert!(evidence.has_verifiable_digest());
        assert!(recorder.verify_integrity(&evidence).await.is_ok());
    }

    #[tokio::test]
    async fn missing_digest_degrades_to_sentinel() {
        let recorder = recorder(Arc::new(UnavailableDigest));
        let evidence = recorder.capture("Jane Doe").await;

        assert_eq!(evidence.integrity_digest, UNKNOWN);
        assert!(recorder.validate(&evidence).valid);

        let strict = recorder.with_config(EvidenceConfig {
            require_verifiable_digest: true,
            ..EvidenceConfig::default()
        });
        assert_eq!(
            strict.validate(&evidence).errors,
            vec![EvidenceDefect::UnverifiableIntegrityDigest]
        );
    }

    #[tokio::test]
    async fn empty_digest_output_is_treated_as_failure() {
        let evidence = recorder(Arc::new(EmptyDigest)).capture("Jane Doe").await;
        assert_eq!(evidence.integrity_digest, UNKNOWN);
    }

    #[tokio::test]
    async fn absent_environment_uses_defaults() {
        let recorder = SignatureEvidenceRecorder::new(
            Arc::new(StaticEnvironment::default()),
            Arc::new(Sha256Digest),
        )
        .with_clock(clock());
        let evidence = recorder.capture("Jane Doe").await;

        assert_eq!(evidence.environment.user_agent, UNKNOWN);
        assert_eq!(evidence.environment.timezone, UNKNOWN);
        assert_eq!(evidence.environment.screen_resolution(), "0x0");
        assert_eq!(evidence.device_fingerprint, "unknown|unknown|0|0");
        // "unknown" is still a present user agent.
        assert!(recorder.validate(&evidence).valid);
    }

    #[tokio::test]
    async fn revoked_consent_is_rejected() {
        let recorder = recorder(Arc::new(Sha256Digest));
        let evidence = SignatureEvidence {
            consent_given: false,
            ..recorder.capture("Jane Doe").await
        };
        let report = recorder.validate(&evidence);
        assert!(!report.valid);
        assert!(report.messages().iter().any(|m| m.contains("Consent")));
    }

    #[tokio::test]
    async fn validate_and_format_are_repeatable() {
        let recorder = recorder(Arc::new(Sha256Digest));
        let first = recorder.capture("Jane Doe").await;
        let second = recorder.capture("Jane Doe").await;

        assert_eq!(first, second);
        assert_eq!(recorder.validate(&first), recorder.validate(&first));
        assert_eq!(recorder.format_for_audit(&first), recorder.format_for_audit(&second));
    }

    #[tokio::test]
    async fn tampering_is_detected() {
        let recorder = recorder(Arc::new(Sha256Digest));
        let evidence = recorder.capture("Jane Doe").await;
        assert!(recorder.verify_integrity(&evidence).await.is_ok());

        let renamed = SignatureEvidence {
            signer_identity: "John Doe".into(),
            ..evidence.clone()
        };
        assert!(matches!(
            recorder.verify_integrity(&renamed).await,
            Err(SigformError::IntegrityMismatch { .. })
        ));

        let backdated = SignatureEvidence {
            timestamp: "2020-01-01T00:00:00.000Z".into(),
            ..evidence
        };
        match recorder.verify_integrity(&backdated).await.unwrap_err() {
            SigformError::IntegrityMismatch { expected, actual } => {
                assert_eq!(expected, backdated.integrity_digest);
                assert_ne!(expected, actual);
            }
            other => panic!("unexpected error variant: {other}"),
        }
    }

    #[tokio::test]
    async fn sentinel_record_cannot_be_verified() {
        let evidence = recorder(Arc::new(UnavailableDigest)).capture("Jane Doe").await;
        let verifier = recorder(Arc::new(Sha256Digest));
        assert!(matches!(
            verifier.verify_integrity(&evidence).await,
            Err(SigformError::DigestUnavailable(_))
        ));
    }

    #[tokio::test]
    async fn origin_filled_after_capture_shows_in_audit() {
        let recorder = recorder(Arc::new(Sha256Digest));
        let evidence = recorder
            .capture("Jane Doe")
            .await
            .with_origin_address("203.0.113.9");
        let text = recorder.format_for_audit(&evidence);
        assert!(text.contains("Origin address: 203.0.113.9"));
        // The origin is not covered by the digest.
        assert!(recorder.verify_integrity(&evidence).await.is_ok());
    }

    #[tokio::test]
    async fn environment_is_read_at_capture_time() {
        let vars = Arc::new(RwLock::new(HashMap::from([(
            "TZ".to_owned(),
            "Europe/Berlin".to_owned(),
        )])));
        let shared = Arc::clone(&vars);
        let env = HostEnvironment::from_lookup(move |key| shared.read().ok()?.get(key).cloned());
        let recorder = SignatureEvidenceRecorder::new(Arc::new(env), Arc::new(Sha256Digest));

        vars.write()
            .unwrap()
            .insert("TZ".to_owned(), "America/New_York".to_owned());

        let evidence = recorder.capture("Jane Doe").await;
        assert_eq!(evidence.environment.timezone, "America/New_York");
    }

    #[tokio::test]
    async fn config_document_drives_validation_policy() {
        let config =
            SigformConfig::from_json(r#"{"evidence":{"require_verifiable_digest":true}}"#).unwrap();
        let recorder = SignatureEvidenceRecorder::from_config(&config);
        assert!(recorder.config().require_verifiable_digest);

        let evidence = SignatureEvidence {
            integrity_digest: UNKNOWN.into(),
            ..recorder.capture("Jane Doe").await
        };
        assert_eq!(
            recorder.validate(&evidence).errors,
            vec![EvidenceDefect::UnverifiableIntegrityDigest]
        );
    }
}
