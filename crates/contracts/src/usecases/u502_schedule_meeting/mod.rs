pub mod draft;
pub mod request;
pub mod response;

pub use draft::MeetingDraft;
pub use request::{GenerateZoomLinkRequest, PublishMeetingRequest, PublishParticipant, ZoomMeetingDetails};
pub use response::{StudentByCourse, ZoomLink};

use crate::usecases::common::UseCaseMetadata;

pub struct ScheduleMeeting;

impl UseCaseMetadata for ScheduleMeeting {
    fn usecase_index() -> &'static str {
        "u502"
    }

    fn usecase_name() -> &'static str {
        "schedule_meeting"
    }

    fn display_name() -> &'static str {
        "Zoom Meeting Scheduler"
    }
}

pub const BATCH_OPTIONS: &[&str] = &["1", "2", "3", "4", "5"];

pub const TIME_ZONES: &[&str] = &["India (GMT+5:30)"];
