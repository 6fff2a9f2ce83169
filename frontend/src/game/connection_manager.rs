use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use blackjack_shared::ServerMsg;
use egui::Context;

use crate::error::ClientError;
use crate::game::websocket::WebSocketConnection;
use crate::store::{ClientState, ConnectionStatus};

/// Bridges WebSocket callbacks and the egui frame loop.
///
/// The callbacks run outside any frame, so they only push into shared
/// queues and request a repaint; [`dispatch_queued_messages`] drains the
/// queues into the state store once per frame.
///
/// [`dispatch_queued_messages`]: ConnectionManager::dispatch_queued_messages
#[derive(Default)]
pub struct ConnectionManager {
    message_queue: Option<Rc<RefCell<VecDeque<ServerMsg>>>>,
    error_queue: Option<Rc<RefCell<VecDeque<String>>>>,
    opened: Option<Rc<RefCell<bool>>>,
}

impl ConnectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connect(
        &mut self,
        conn: &mut WebSocketConnection,
        app_state: &mut ClientState,
        ctx: &Context,
    ) {
        let server_address = app_state.settings.server_address.clone();
        app_state.connection.connection_status = ConnectionStatus::Connecting;
        app_state.ui.last_error = None;
        app_state.ui.last_info = Some(format!("Connecting to {}...", server_address));

        let message_queue = Rc::new(RefCell::new(VecDeque::<ServerMsg>::new()));
        let error_queue = Rc::new(RefCell::new(VecDeque::<String>::new()));
        let opened = Rc::new(RefCell::new(false));

        // Clone queues and context for each closure
        let opened_for_open = opened.clone();
        let msg_queue_for_msg = message_queue.clone();
        let error_queue_for_error = error_queue.clone();
        let error_queue_for_close = error_queue.clone();
        let ctx_for_open = ctx.clone();
        let ctx_for_msg = ctx.clone();
        let ctx_for_error = ctx.clone();
        let ctx_for_close = ctx.clone();

        conn.connect(
            &server_address,
            move || {
                if let Ok(mut flag) = opened_for_open.try_borrow_mut() {
                    *flag = true;
                    ctx_for_open.request_repaint();
                }
            },
            move |msg: ServerMsg| {
                if let Ok(mut queue) = msg_queue_for_msg.try_borrow_mut() {
                    queue.push_back(msg);
                    ctx_for_msg.request_repaint();
                }
            },
            move |error: String| {
                if let Ok(mut queue) = error_queue_for_error.try_borrow_mut() {
                    queue.push_back(error);
                    ctx_for_error.request_repaint();
                }
            },
            move |reason: String| {
                if let Ok(mut queue) = error_queue_for_close.try_borrow_mut() {
                    queue.push_back(reason);
                    ctx_for_close.request_repaint();
                }
            },
        );

        // Store the queues for processing in the update loop
        self.message_queue = Some(message_queue);
        self.error_queue = Some(error_queue);
        self.opened = Some(opened);
    }

    pub fn disconnect(&mut self, conn: &mut WebSocketConnection, app_state: &mut ClientState) {
        conn.close();
        self.message_queue = None;
        self.error_queue = None;
        self.opened = None;
        app_state.connection.connection_status = ConnectionStatus::Disconnected;
        app_state.ui.last_info = Some("Disconnected.".to_string());
    }

    /// Drain queued events from WebSocket callbacks into the state store.
    pub fn dispatch_queued_messages(&mut self, app_state: &mut ClientState) {
        if let Some(flag) = &self.opened {
            if let Ok(mut flag) = flag.try_borrow_mut() {
                if *flag {
                    *flag = false;
                    app_state.connection.connection_status = ConnectionStatus::Connected;
                    app_state.ui.last_info = Some(format!(
                        "Connected to {}.",
                        app_state.settings.server_address
                    ));
                }
            }
        }

        if let Some(queue) = &self.message_queue {
            if let Ok(mut q) = queue.try_borrow_mut() {
                while let Some(msg) = q.pop_front() {
                    app_state.queue_server_msg(msg);
                }
            }
        }
        app_state.dispatch_pending_messages();

        if let Some(queue) = &self.error_queue {
            if let Ok(mut q) = queue.try_borrow_mut() {
                while let Some(error) = q.pop_front() {
                    app_state.ui.last_error = Some(ClientError::Transport(error).to_string());
                    app_state.connection.connection_status = ConnectionStatus::Disconnected;
                }
            }
        }
    }
}
