use std::cell::RefCell;

use leptos::prelude::*;
use leptos::tachys::dom::window;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::{ShopEvent, ShopStore};

type PendingTimeout = (i32, Closure<dyn FnMut()>);

/// A single browser timeout that owns its callback.
/// Scheduling again or cancelling clears the old timeout and drops its closure.
#[derive(Default)]
struct ExpiryTimer {
    pending: RefCell<Option<PendingTimeout>>,
}

impl ExpiryTimer {
    fn schedule(&self, delay_ms: i32, on_fire: impl FnMut() + 'static) -> Result<(), JsValue> {
        self.cancel();

        let callback = Closure::<dyn FnMut()>::new(on_fire);
        let handle = window().set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            delay_ms,
        )?;
        *self.pending.borrow_mut() = Some((handle, callback));
        Ok(())
    }

    fn cancel(&self) {
        if let Some((handle, _callback)) = self.pending.borrow_mut().take() {
            window().clear_timeout_with_handle(handle);
        }
    }

    #[cfg(test)]
    fn is_pending(&self) -> bool {
        self.pending.borrow().is_some()
    }
}

/// Displays the transient message until it expires (non-modal).
#[component]
pub fn Toast() -> impl IntoView {
    let store = use_context::<ShopStore>().expect("ShopStore context missing");

    let timer = std::rc::Rc::new(ExpiryTimer::default());

    Effect::new({
        let timer = std::rc::Rc::clone(&timer);
        move |_| {
            let Some(remaining) = store.message_remaining_ms() else {
                timer.cancel();
                return;
            };
            let delay = i32::try_from(remaining).unwrap_or(i32::MAX);

            if let Err(e) = timer.schedule(delay, move || store.dispatch(ShopEvent::ExpireMessage)) {
                tracing::warn!("Failed to schedule message expiry: {e:?}");
            }
        }
    });

    view! {
        <Show when=move || store.visible_message().is_some()>
            <div class="toast">
                {move || store.visible_message().unwrap_or_default()}
            </div>
        </Show>
    }
}
