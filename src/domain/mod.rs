pub mod budget;
pub mod city;
pub mod common;
pub mod profile;

pub use budget::{BudgetBreakdown, CityOutlook, ScoreBand};
pub use city::{CategorySalary, CityRecord, DatasetRow};
pub use common::{Coordinates, Displayable};
pub use profile::{LifestyleTier, UserProfile};
