//! # Request/Response Plumbing
//!
//! Every actor in this crate follows the same shape: a request enum whose
//! variants carry a `respond_to` [`Response`] sender, an actor task that owns
//! the state and drains an `mpsc` channel, and a cloneable client that wraps the
//! channel sender.
//!
//! [`request`] is the client half of that exchange: send one message, wait for
//! the one reply.

use tokio::sync::{mpsc, oneshot};

/// Errors raised by the channel plumbing itself, never by actor logic.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
}

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<T>;

/// Sends the message built by `make` and awaits its reply.
///
/// `make` receives the responder the actor must answer on. Fails with
/// [`FrameworkError::ActorClosed`] if the actor's receiver is gone and with
/// [`FrameworkError::ActorDropped`] if the actor dropped the responder
/// without answering.
pub async fn request<M, T>(
    sender: &mpsc::Sender<M>,
    make: impl FnOnce(Response<T>) -> M,
) -> Result<T, FrameworkError> {
    let (respond_to, response) = oneshot::channel();
    sender
        .send(make(respond_to))
        .await
        .map_err(|_| FrameworkError::ActorClosed)?;
    response.await.map_err(|_| FrameworkError::ActorDropped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    enum Echo {
        Say {
            text: String,
            respond_to: Response<String>,
        },
    }

    #[tokio::test]
    async fn test_request_round_trip() {
        let (sender, mut receiver) = mpsc::channel(4);
        tokio::spawn(async move {
            while let Some(Echo::Say { text, respond_to }) = receiver.recv().await {
                let _ = respond_to.send(text.to_uppercase());
            }
        });

        let reply = request(&sender, |respond_to| Echo::Say {
            text: "hi".into(),
            respond_to,
        })
        .await;

        assert_eq!(reply, Ok("HI".to_string()));
    }

    #[tokio::test]
    async fn test_request_to_closed_actor() {
        let (sender, receiver) = mpsc::channel::<Echo>(4);
        drop(receiver);

        let reply = request(&sender, |respond_to| Echo::Say {
            text: "hi".into(),
            respond_to,
        })
        .await;

        assert_eq!(reply, Err(FrameworkError::ActorClosed));
    }

    #[tokio::test]
    async fn test_request_with_dropped_responder() {
        let (sender, mut receiver) = mpsc::channel::<Echo>(4);
        tokio::spawn(async move {
            // Receive and drop without answering.
            let _ = receiver.recv().await;
        });

        let reply = request(&sender, |respond_to| Echo::Say {
            text: "hi".into(),
            respond_to,
        })
        .await;

        assert_eq!(reply, Err(FrameworkError::ActorDropped));
    }
}
