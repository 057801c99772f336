pub mod compare;
pub mod comparison;
pub mod derived;
pub mod fake_season;
pub mod leaderboard;
pub mod metrics;
pub mod normalize;
pub mod range;
pub mod record;
pub mod season;
pub mod standings;

pub use compare::{Winner, compare};
pub use comparison::{ComparisonDataset, build_comparison};
pub use derived::{per_appearance, per90, ratio_percent};
pub use metrics::{Category, Direction, MetricDescriptor};
pub use normalize::{normalize, percentile, z_score};
pub use range::{MetricRange, RangeMode, metric_range};
pub use record::{StatRecord, get};
pub use season::Season;
