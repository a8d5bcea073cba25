use serde::{Deserialize, Serialize};

use crate::json::JSON;
use crate::scheduling::{DateFilter, DateIndex, IncludedDays, WeekdaySelector};

impl<P> JSON for DateIndex<P> where P: Serialize + for<'de> Deserialize<'de> {}
impl JSON for WeekdaySelector {}
impl JSON for IncludedDays {}
impl JSON for DateFilter {}
