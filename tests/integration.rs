// SPDX-License-Identifier: MPL-2.0
use corner_toast::config::defaults::{CLOSE_SELECTOR, HIDE_ANIMATION_MS, TOAST_CLASS};
use corner_toast::surface::{MemorySurface, Side, Surface, SurfaceEvent};
use corner_toast::toast::{
    PartialOptions, Position, PromiseOptions, ToastOptions, ToastState, ToastType, Toaster,
};
use futures_util::FutureExt;
use std::sync::Arc;
use std::time::Duration;

fn setup() -> (Toaster, Arc<MemorySurface>) {
    let surface = Arc::new(MemorySurface::new());
    (Toaster::with_surface(surface.clone()), surface)
}

fn sleep_ms(ms: u64) -> tokio::time::Sleep {
    tokio::time::sleep(Duration::from_millis(ms))
}

fn toasts_of(surface: &MemorySurface, kind: &str) -> Vec<corner_toast::surface::ElementId> {
    surface.find_by_class(&format!("{TOAST_CLASS}--{kind}"))
}

#[tokio::test(start_paused = true)]
async fn test_auto_close_success_toast_end_to_end() {
    let (toaster, surface) = setup();
    let toast = toaster.toast(
        Some("Saved!"),
        PartialOptions::new()
            .toast_type(ToastType::Success)
            .auto_close(true)
            .duration_ms(1000),
    );
    toast.show().expect("show succeeds");

    // Inserted immediately into the default (top-right) container
    let container = toaster
        .registry()
        .get(&Position::TopRight)
        .expect("top-right container exists");
    let element = toast.element().expect("element stored");
    assert_eq!(surface.children(container), vec![element]);
    assert_eq!(surface.parent(container), Some(surface.root()));

    sleep_ms(999).await;
    assert!(surface.contains(element));

    // Timer fires at 1000ms, the slide-out takes another 400ms
    sleep_ms(1 + HIDE_ANIMATION_MS + 1).await;
    assert!(!surface.contains(element));
    assert!(surface.children(container).is_empty());
    assert_eq!(toast.state(), ToastState::Removed);

    // Empty containers stay in place
    assert_eq!(surface.children(surface.root()), vec![container]);
}

#[tokio::test(start_paused = true)]
async fn test_container_append_order_follows_show_order() {
    let (toaster, surface) = setup();
    let toasts: Vec<_> = ["first", "second", "third"]
        .into_iter()
        .map(|message| toaster.toast(Some(message), PartialOptions::new().position(Position::BottomLeft)))
        .collect();
    for toast in &toasts {
        toast.show().expect("show succeeds");
    }

    let container = toaster
        .registry()
        .get(&Position::BottomLeft)
        .expect("bottom-left container exists");
    let expected: Vec<_> = toasts
        .iter()
        .map(|toast| toast.element().expect("element stored"))
        .collect();
    assert_eq!(surface.children(container), expected);
    assert_eq!(toaster.registry().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_left_positions_slide_left_and_others_right() {
    let (toaster, surface) = setup();
    let left = toaster.toast(None, PartialOptions::new().position(Position::BottomLeft));
    let right = toaster.toast(None, PartialOptions::new().position(Position::TopRight));
    let middle = toaster.toast(None, PartialOptions::new().position("middle"));
    for toast in [&left, &right, &middle] {
        toast.show().expect("show succeeds");
    }
    let elements: Vec<_> = [&left, &right, &middle]
        .iter()
        .map(|toast| toast.element().expect("element stored"))
        .collect();

    for toast in [&left, &right, &middle] {
        toast.hide();
    }

    let sides: Vec<_> = elements
        .iter()
        .map(|element| surface.offset_style(*element).expect("offset applied").side)
        .collect();
    assert_eq!(sides, vec![Side::Left, Side::Right, Side::Right]);
    assert_eq!(toaster.registry().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_show_then_immediate_hide_prevents_second_detach() {
    let (toaster, surface) = setup();
    let toast = toaster.toast(Some("quick"), PartialOptions::new().duration_ms(500));
    toast.show().expect("show succeeds");
    let element = toast.element().expect("element stored");

    toast.hide();
    sleep_ms(2000).await;

    assert_eq!(surface.removal_count(element), 1);
    let offsets = surface
        .journal()
        .iter()
        .filter(|event| matches!(event, SurfaceEvent::OffsetApplied { element: e, .. } if *e == element))
        .count();
    assert_eq!(offsets, 1);
}

#[tokio::test(start_paused = true)]
async fn test_close_button_and_timer_race_detach_once() {
    let (toaster, surface) = setup();
    let toast = toaster.toast(Some("race"), PartialOptions::new().duration_ms(100));
    toast.show().expect("show succeeds");
    let element = toast.element().expect("element stored");

    sleep_ms(50).await;
    assert_eq!(surface.click(element, CLOSE_SELECTOR), 1);
    sleep_ms(60).await;
    surface.click(element, CLOSE_SELECTOR);

    toast.hidden().await;
    sleep_ms(1000).await;
    assert_eq!(surface.removal_count(element), 1);
}

#[tokio::test(start_paused = true)]
async fn test_promise_success_flow() {
    let (toaster, surface) = setup();
    let operation = async {
        sleep_ms(100).await;
        Ok::<_, String>("value")
    };

    let bridged = toaster.promise(
        operation,
        PromiseOptions::new()
            .pending("Working...")
            .success("Done")
            .error("Failed"),
    );

    // Pending notice appears before the operation is polled
    let pending = toasts_of(&surface, "notice");
    assert_eq!(pending.len(), 1);
    let pending = pending[0];
    assert_eq!(surface.text(pending).as_deref(), Some("Working..."));
    assert!(toasts_of(&surface, "success").is_empty());

    let result = bridged.await;
    assert_eq!(result, Ok("value"));

    // Pending is sliding out, exactly one success toast is up
    assert!(surface.offset_style(pending).is_some());
    let success = toasts_of(&surface, "success");
    assert_eq!(success.len(), 1);
    assert!(surface
        .text(success[0])
        .is_some_and(|text| text.starts_with("Done")));
    assert!(toasts_of(&surface, "error").is_empty());

    // The slide-out runs before the success toast is appended
    let journal = surface.journal();
    let hidden_at = journal
        .iter()
        .position(|event| *event == SurfaceEvent::OffsetApplied { element: pending, side: Side::Right })
        .expect("pending hidden");
    let shown_at = journal
        .iter()
        .position(|event| matches!(event, SurfaceEvent::Appended { element, .. } if *element == success[0]))
        .expect("success shown");
    assert!(hidden_at < shown_at);

    sleep_ms(HIDE_ANIMATION_MS + 1).await;
    assert!(!surface.contains(pending));
    assert_eq!(surface.removal_count(pending), 1);
}

#[tokio::test(start_paused = true)]
async fn test_promise_failure_flow_propagates_error() {
    let (toaster, surface) = setup();
    let operation = async {
        sleep_ms(100).await;
        Err::<u32, _>(std::io::Error::other("disk on fire"))
    };

    let result = toaster
        .promise(
            operation,
            PromiseOptions::new()
                .pending("Working...")
                .success("Done")
                .error("Failed"),
        )
        .await;

    let err = result.expect_err("failure propagates");
    assert_eq!(err.to_string(), "disk on fire");

    let errors = toasts_of(&surface, "error");
    assert_eq!(errors.len(), 1);
    assert!(surface
        .text(errors[0])
        .is_some_and(|text| text.starts_with("Failed")));
    assert!(toasts_of(&surface, "success").is_empty());

    sleep_ms(HIDE_ANIMATION_MS + 1).await;
    assert!(toasts_of(&surface, "notice").is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_promise_overrides_position_of_all_toasts() {
    let (toaster, surface) = setup();
    let bridged = toaster.promise(
        async { Ok::<_, ()>(()) },
        PromiseOptions::new().overrides(PartialOptions::new().position(Position::BottomLeft)),
    );
    bridged.await.expect("operation succeeds");

    let container = toaster
        .registry()
        .get(&Position::BottomLeft)
        .expect("bottom-left container exists");
    assert!(toaster.registry().get(&Position::TopRight).is_none());
    // Pending (hiding) and success both live in the overridden container
    assert_eq!(surface.children(container).len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_toasters_sharing_a_surface_share_containers() {
    let surface = Arc::new(MemorySurface::new());
    let first = Toaster::with_surface(surface.clone());
    let second = Toaster::with_surface(surface.clone());

    let a = first.toast(Some("from first"), PartialOptions::new());
    let b = second.toast(Some("from second"), PartialOptions::new());
    a.show().expect("show succeeds");
    b.show().expect("show succeeds");

    let containers = surface.find_by_class("mw-toast-notification-container");
    assert_eq!(containers.len(), 1);
    assert_eq!(
        surface.children(containers[0]),
        vec![
            a.element().expect("element stored"),
            b.element().expect("element stored"),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_custom_renderer_close_control_hides_toast() {
    let surface = Arc::new(MemorySurface::new());
    let toaster = Toaster::new(
        surface.clone(),
        Arc::new(|options: &ToastOptions| {
            format!(
                "<section class='{TOAST_CLASS}'><p>{}</p><nav><button class='mw-toast-notification__close' disabled>close</button></nav></section>",
                options.message()
            )
        }),
    );
    let toast = toaster.toast(Some("custom"), PartialOptions::new().auto_close(false));
    toast.show().expect("show succeeds");
    let element = toast.element().expect("element stored");

    assert_eq!(surface.click(element, CLOSE_SELECTOR), 1);
    toast.hidden().await;
    assert!(!surface.contains(element));
}

#[test]
fn test_promise_bridge_outside_tokio_shows_terminal_toast() {
    let (toaster, surface) = setup();
    let result = toaster
        .promise(
            async { Err::<u32, _>("nope") },
            PromiseOptions::new().error("Failed"),
        )
        .now_or_never();

    assert_eq!(result, Some(Err("nope")));
    assert!(toasts_of(&surface, "notice").is_empty());
    let errors = toasts_of(&surface, "error");
    assert_eq!(errors.len(), 1);
    assert!(surface
        .text(errors[0])
        .is_some_and(|text| text.starts_with("Failed")));
}
