pub mod analytics;
pub mod balance;
pub mod catalog;
pub mod coaching;
pub mod complement;
pub mod config;
pub mod display;
pub mod error;
pub mod gaps;
pub mod io;
pub mod paths;
pub mod team;
pub mod types;
pub mod validation;

pub use analytics::{team_analytics, TeamAnalytics};
pub use balance::{domain_balance, DomainBalance};
pub use catalog::{domain_of, Strength, STRENGTHS};
pub use complement::{complementary, ComplementarityResult};
pub use display::{domain_color, sort_by_domain};
pub use error::{Result, StrengthsError};
pub use gaps::{identify_gaps, TeamGaps};
pub use team::{ManagerProfile, Person, TeamMember};
pub use types::StrengthDomain;
pub use validation::{validate_selection, SelectionValidation};
