//! Status transition rules. Checks here are pure so handlers can decide before
//! anything is written.
//!
//! ```text
//! Order Received -> Preparing -> Out for Delivery -> Delivered
//!        \              \
//!         +--------------+--> Cancelled
//! ```

use thiserror::Error;

use super::repository::{self, Order, OrderStatus};
use crate::modules::user::{self, repository::User};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Cannot update status of a {0} order")]
    Locked(OrderStatus),
    #[error("Cannot cancel an order that has been delivered")]
    AlreadyDelivered,
    #[error("Order is already cancelled")]
    AlreadyCancelled,
    #[error("Cannot cancel an order that is out for delivery")]
    OutForDelivery,
    #[error("Not authorized to cancel this order")]
    NotOwner,
}

/// Admin overwrite. Anything goes until the order reaches a terminal state;
/// intermediate states may be skipped.
pub fn check_status_update(current: OrderStatus, _target: OrderStatus) -> Result<(), TransitionError> {
    match current.is_terminal() {
        true => Err(TransitionError::Locked(current)),
        false => Ok(()),
    }
}

/// Returns the status the order moves to when `user` cancels it.
pub fn check_cancellation(order: &Order, user: &User) -> Result<OrderStatus, TransitionError> {
    if !user::repository::is_admin(user) && !repository::is_owner(order, &user.id) {
        return Err(TransitionError::NotOwner);
    }

    match order.status {
        OrderStatus::Delivered => Err(TransitionError::AlreadyDelivered),
        OrderStatus::Cancelled => Err(TransitionError::AlreadyCancelled),
        OrderStatus::OutForDelivery => Err(TransitionError::OutForDelivery),
        OrderStatus::OrderReceived | OrderStatus::Preparing => Ok(OrderStatus::Cancelled),
    }
}
