use crate::errors::ServerError;
use astra::Response;

pub type ResultResp = Result<Response, ServerError>;

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::DbError(_)
            | ServerError::DataError(_)
            | ServerError::Config(_)
            | ServerError::InternalError => 500,
        }
    }
}
