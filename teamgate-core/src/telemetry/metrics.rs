//! Metric definitions

use metrics::{counter, describe_counter};

/// Register metric descriptions and emit initial zero values so exporters
/// list every counter from startup.
pub fn describe_metrics() {
    describe_counter!(
        "teamgate_signup_validations_total",
        "Invitation signup validations by outcome"
    );
    describe_counter!(
        "teamgate_role_changes_total",
        "Role change authorizations by outcome"
    );

    counter!("teamgate_signup_validations_total", "outcome" => "valid").absolute(0);
    counter!("teamgate_role_changes_total", "outcome" => "authorized").absolute(0);
}
