mod status;

pub use status::{Notice, NoticeKind, Spinner};
