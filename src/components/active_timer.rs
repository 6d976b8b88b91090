//! Active Timer Widget
//!
//! Shows the running task timer and refetches it on a fixed short interval.
//! This is the app's only polling site.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::models::ActiveTimer;
use crate::session::use_session;

fn format_elapsed(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

#[component]
pub fn ActiveTimerWidget(poll_secs: u32) -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();
    let (timer, set_timer) = signal(None::<ActiveTimer>);

    // Fixed-interval poll; stops when the session goes away
    spawn_local(async move {
        loop {
            if !session.is_authenticated() {
                break;
            }
            match api::tasks::active_timer(session).await {
                Ok(active) => set_timer.set(active),
                Err(api::ApiError::Unauthorized) => break,
                Err(_) => {}
            }
            TimeoutFuture::new(poll_secs * 1000).await;
        }
    });

    let stop = move |_| {
        let Some(active) = timer.get() else { return };
        spawn_local(async move {
            match api::tasks::stop_timer(session, active.task_id).await {
                Ok(()) => {
                    set_timer.set(None);
                    ctx.reload_tasks();
                }
                Err(e) => ctx.toast_error(e.user_message()),
            }
        });
    };

    view! {
        {move || timer.get().map(|active| view! {
            <div class="active-timer">
                <span class="active-timer-title">{active.task_title.clone()}</span>
                <span class="active-timer-elapsed">{format_elapsed(active.elapsed_seconds)}</span>
                <button class="active-timer-stop" on:click=stop>"Stop"</button>
            </div>
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0), "0:00");
        assert_eq!(format_elapsed(65), "1:05");
        assert_eq!(format_elapsed(3605), "1:00:05");
    }
}
