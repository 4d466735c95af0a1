use super::common::{PageQuery, PagedQuery, Query, QueryParams};

wire_enum! {
    /// Calendar season, used in `/seasons/{year}/{season}`.
    Season {
        Winter => "winter",
        Spring => "spring",
        Summer => "summer",
        Fall => "fall",
    }
}

wire_enum! {
    /// Media type filter for seasonal listings.
    SeasonFilter {
        Tv => "tv",
        Movie => "movie",
        Ova => "ova",
        Ona => "ona",
        Special => "special",
        Unknown => "unknown",
    }
}

wire_enum! {
    /// Broadcast day filter for `/schedules`.
    ScheduleDay {
        Monday => "monday",
        Tuesday => "tuesday",
        Wednesday => "wednesday",
        Thursday => "thursday",
        Friday => "friday",
        Saturday => "saturday",
        Sunday => "sunday",
        Other => "other",
        Unknown => "unknown",
    }
}

/// Parameters for the seasonal listings.
#[derive(Clone, Debug, Default)]
pub struct SeasonQuery {
    pub filter: Option<SeasonFilter>,
    pub sfw: Option<bool>,
    pub unapproved: Option<bool>,
    pub paging: PageQuery,
}

impl Query for SeasonQuery {
    fn params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push("filter", self.filter);
        params.push("sfw", self.sfw);
        params.push("unapproved", self.unapproved);
        self.paging.append_to(&mut params);
        params
    }
}

impl PagedQuery for SeasonQuery {
    fn get_paging(&mut self) -> &mut PageQuery {
        &mut self.paging
    }
}

impl SeasonQuery {
    pub fn with_filter(mut self, filter: SeasonFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn with_sfw(mut self, sfw: bool) -> Self {
        self.sfw = Some(sfw);
        self
    }

    pub fn with_unapproved(mut self, unapproved: bool) -> Self {
        self.unapproved = Some(unapproved);
        self
    }
}

/// Parameters for `/schedules`.
#[derive(Clone, Debug, Default)]
pub struct ScheduleQuery {
    pub filter: Option<ScheduleDay>,
    pub sfw: Option<bool>,
    pub paging: PageQuery,
}

impl Query for ScheduleQuery {
    fn params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push("filter", self.filter);
        params.push("sfw", self.sfw);
        self.paging.append_to(&mut params);
        params
    }
}

impl PagedQuery for ScheduleQuery {
    fn get_paging(&mut self) -> &mut PageQuery {
        &mut self.paging
    }
}

impl ScheduleQuery {
    pub fn with_day(mut self, day: ScheduleDay) -> Self {
        self.filter = Some(day);
        self
    }

    pub fn with_sfw(mut self, sfw: bool) -> Self {
        self.sfw = Some(sfw);
        self
    }
}
