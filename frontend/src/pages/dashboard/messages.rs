use super::state::TimeRange;

pub enum Msg {
    SelectSource(String),
    SetTimeRange(TimeRange),
}
