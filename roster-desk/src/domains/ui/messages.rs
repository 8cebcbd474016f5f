use crate::domains::ui::feedback_ui::FeedbackMessage;

#[derive(Clone, Debug)]
pub enum Message {
    Feedback(FeedbackMessage),
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Feedback(msg) => msg.name(),
        }
    }
}
