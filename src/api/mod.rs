pub mod format;

pub use format::{
    AthleteResponse, CreatedResponse, MeetResponse, MessageResponse, ResultResponse,
    TopTimeResponse, DATE_FORMAT,
};
