use std::sync::Arc;

use service::mail::MailRepository;

#[derive(Clone)]
pub struct ServerState {
    pub mail: Arc<dyn MailRepository>,
}

impl ServerState {
    pub fn new(mail: Arc<dyn MailRepository>) -> Self {
        Self { mail }
    }
}
