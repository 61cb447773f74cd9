//! # Mock Framework
//!
//! Utilities for testing [`crate::clients::DirectoryClient`] without a running store actor.
//!
//! Use [`create_mock_handle`] to get a handle and the receiver its requests land on.
//! Then use helpers like [`expect_dispatch`] or [`expect_find`] to assert each request
//! and script the reply.

use tokio::sync::mpsc;

use crate::domain::Employee;
use crate::store::{Command, DirectoryState, Outcome};
use crate::store_actor::{Response, StoreHandle, StoreRequest};

/// Creates a store handle whose requests arrive on the returned receiver.
pub fn create_mock_handle(buffer_size: usize) -> (StoreHandle, mpsc::Receiver<StoreRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreHandle::new(sender), receiver)
}

/// Helper to verify that the next message is a Dispatch request
pub async fn expect_dispatch(receiver: &mut mpsc::Receiver<StoreRequest>) -> Option<(Command, Response<Outcome>)> {
    match receiver.recv().await {
        Some(StoreRequest::Dispatch { command, respond_to }) => Some((command, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a GetState request
pub async fn expect_get_state(receiver: &mut mpsc::Receiver<StoreRequest>) -> Option<Response<DirectoryState>> {
    match receiver.recv().await {
        Some(StoreRequest::GetState { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a Find request
pub async fn expect_find(receiver: &mut mpsc::Receiver<StoreRequest>) -> Option<(String, Response<Option<Employee>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Find { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Visible request
pub async fn expect_visible(receiver: &mut mpsc::Receiver<StoreRequest>) -> Option<Response<Vec<Employee>>> {
    match receiver.recv().await {
        Some(StoreRequest::Visible { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample_employees;

    #[tokio::test]
    async fn test_mock_handle() {
        let (handle, mut receiver) = create_mock_handle(10);

        let visible_task = tokio::spawn(async move { handle.visible().await });

        let responder = expect_visible(&mut receiver).await.expect("Expected Visible request");
        responder.send(Ok(sample_employees())).unwrap();

        let rows = visible_task.await.unwrap().unwrap();
        assert_eq!(rows.len(), 12);
    }

    #[tokio::test]
    async fn test_mock_find() {
        let (handle, mut receiver) = create_mock_handle(10);

        let find_task = tokio::spawn(async move { handle.find("EMP404").await });

        let (id, responder) = expect_find(&mut receiver).await.expect("Expected Find request");
        assert_eq!(id, "EMP404");
        responder.send(Ok(None)).unwrap();

        assert_eq!(find_task.await.unwrap(), Ok(None));
    }
}
