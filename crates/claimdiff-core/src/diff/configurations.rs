//! Test suite configuration comparison.

use crate::claim::ClaimDocument;
use crate::diff::model::{AbnormalEventsCount, ConfigurationsDiffReport};
use crate::diff::versions::diff_values;

/// Section label for the claim's test suite configuration
pub const CONFIGURATION_SECTION: &str = "Cert Suite Configuration";

/// Compare the test suite configurations of two claims leaf by leaf and
/// count the abnormal events each one recorded.
pub fn diff_configurations(claim1: &ClaimDocument, claim2: &ClaimDocument) -> ConfigurationsDiffReport {
    ConfigurationsDiffReport {
        config: diff_values(CONFIGURATION_SECTION, &claim1.configuration, &claim2.configuration),
        abnormal_events: AbnormalEventsCount {
            claim1: claim1.abnormal_events.len(),
            claim2: claim2.abnormal_events.len(),
        },
    }
}
