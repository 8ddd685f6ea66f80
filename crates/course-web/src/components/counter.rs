use leptos::prelude::*;

/// Value a counter shows `elapsed_ms` into an animation of `duration_ms`
pub fn counter_value(target: u64, elapsed_ms: f64, duration_ms: f64) -> u64 {
    if duration_ms <= 0.0 || elapsed_ms >= duration_ms {
        return target;
    }
    if elapsed_ms <= 0.0 {
        return 0;
    }
    (target as f64 * (elapsed_ms / duration_ms)).floor() as u64
}

/// Format a count with `.` thousands separators
pub fn format_count(value: u64) -> String {
    let s = value.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push('.');
        }
        result.push(c);
    }
    result
}

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::Cell;
    use std::rc::Rc;

    use leptos::prelude::*;
    use wasm_bindgen::prelude::*;
    use web_sys::window;

    use super::counter_value;

    const TICK_MS: i32 = 40;

    /// Check if user prefers reduced motion
    fn prefers_reduced_motion() -> bool {
        window()
            .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
            .flatten()
            .map(|mq| mq.matches())
            .unwrap_or(false)
    }

    /// Count `set_value` up from zero to `target` over `duration` seconds
    pub fn animate(target: u64, duration: f64, set_value: WriteSignal<u64>) {
        if prefers_reduced_motion() || duration <= 0.0 {
            return;
        }
        let Some(window) = window() else {
            return;
        };

        let started = js_sys::Date::now();
        let duration_ms = duration * 1000.0;
        set_value.set(0);

        let handle = Rc::new(Cell::new(None::<i32>));
        let tick_handle = Rc::clone(&handle);
        let callback = Closure::wrap(Box::new(move || {
            let current = counter_value(target, js_sys::Date::now() - started, duration_ms);
            set_value.set(current);
            if current >= target
                && let (Some(id), Some(w)) = (tick_handle.get(), web_sys::window())
            {
                w.clear_interval_with_handle(id);
            }
        }) as Box<dyn FnMut()>);

        match window.set_interval_with_callback_and_timeout_and_arguments_0(callback.as_ref().unchecked_ref(), TICK_MS) {
            Ok(id) => handle.set(Some(id)),
            Err(_) => set_value.set(target),
        }

        // The interval clears itself at the target; the closure has to outlive it.
        callback.forget();
    }
}

/// Counter that counts up from zero to `target` once mounted
#[component]
pub fn AnimatedCounter(
    target: u64,
    /// Seconds
    duration: f64,
    #[prop(optional, into)] suffix: Option<String>,
) -> impl IntoView {
    // Server markup carries the final value; the client restarts from zero.
    let (value, set_value) = signal(target);

    Effect::new(move |_| {
        #[cfg(feature = "hydrate")]
        browser::animate(target, duration, set_value);
        #[cfg(not(feature = "hydrate"))]
        let _ = (duration, set_value);
    });

    view! {
        <span class="counter-value">
            {move || format_count(value.get())}
            {suffix}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_bounds() {
        assert_eq!(counter_value(1200, 0.0, 2000.0), 0);
        assert_eq!(counter_value(1200, 2000.0, 2000.0), 1200);
        assert_eq!(counter_value(1200, 5000.0, 2000.0), 1200);
        assert_eq!(counter_value(1200, 1000.0, 2000.0), 600);
    }

    #[test]
    fn test_zero_duration_is_immediate() {
        assert_eq!(counter_value(35, 0.0, 0.0), 35);
        assert_eq!(counter_value(35, 0.0, -1.0), 35);
    }

    #[test]
    fn test_counter_is_monotone() {
        let mut last = 0;
        for step in 0..=100 {
            let v = counter_value(987, step as f64 * 25.0, 2500.0);
            assert!(v >= last);
            last = v;
        }
        assert_eq!(last, 987);
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1.000");
        assert_eq!(format_count(1234567), "1.234.567");
    }
}
