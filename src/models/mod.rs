pub mod complaint;
pub mod user;

pub use complaint::{
    Attachment, AttachmentKind, Complaint, ComplaintCategory, ComplaintDraft,
    ComplaintPriority, ComplaintStatus, ComplaintUpdate, Location, UpdateKind,
};
pub use user::{LoginRequest, RegisterRequest, Session, User, UserRole};
