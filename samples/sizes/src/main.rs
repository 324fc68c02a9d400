//! Sizes sample application.
//!
//! Walks through construction, casting and cross-kind equality, printing
//! `OK` or `FAIL` for each check. Set `RUST_LOG=bounded_enum=trace` to see
//! the library's diagnostics.

mod model;

use bounded_enum::BoundedError;
use model::{AnySize, BasicSize, ExtendedSize, LargeSize, Size, SmallSize, Weekday, WorkDay};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), BoundedError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sizes=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Running size checks...");

    workdays()?;
    small_sizes()?;
    casts()?;
    unrelated_kinds()?;
    related_kinds()?;

    Ok(())
}

fn report(label: &str, passed: bool) {
    println!("{label}: {}", if passed { "OK" } else { "FAIL" });
}

fn workdays() -> Result<(), BoundedError> {
    match WorkDay::new(Weekday::Sunday) {
        Ok(day) => report(&format!("WorkDay rejects Sunday (got {day})"), false),
        Err(error) => {
            tracing::debug!(%error, "Sunday rejected");
            report("WorkDay rejects Sunday", error.is_out_of_range());
        }
    }

    let monday = WorkDay::new(Weekday::Monday)?;
    report("WorkDay(Monday) equals Weekday::Monday", *monday == Weekday::Monday);
    Ok(())
}

fn small_sizes() -> Result<(), BoundedError> {
    match SmallSize::new(Size::Large) {
        Ok(size) => report(&format!("SmallSize rejects Large (got {size})"), false),
        Err(error) => {
            tracing::debug!(%error, "Large rejected");
            report("SmallSize rejects Large", error.is_out_of_range());
        }
    }

    let large = LargeSize::new(Size::Large)?;
    report("LargeSize accepts Large", large.value() == Size::Large);
    Ok(())
}

fn casts() -> Result<(), BoundedError> {
    let extra_small = SmallSize::new(Size::ExtraSmall)?;
    println!("{extra_small}");

    let raw: Size = *extra_small;
    println!("{raw:?}");

    let integer = i64::from(extra_small.clone());
    println!("{integer}");

    let by_raw = match *extra_small {
        Size::ExtraSmall => "ExtraSmall",
        _ => "other",
    };
    report("match on raw value", by_raw == "ExtraSmall");

    let by_integer = match integer {
        1 => "ExtraSmall",
        _ => "other",
    };
    report("match on integer value", by_integer == "ExtraSmall");
    Ok(())
}

fn unrelated_kinds() -> Result<(), BoundedError> {
    let real_small = SmallSize::new(Size::Small)?;
    let any_small = AnySize::new(Size::Small)?;

    report("SmallSize(Small) != AnySize(Small)", real_small != any_small);
    report("AnySize(Small) != SmallSize(Small)", any_small != real_small);
    Ok(())
}

fn related_kinds() -> Result<(), BoundedError> {
    let basic_small = BasicSize::new(Size::Small)?;
    let extended_small = ExtendedSize::new(Size::Small)?;

    report("BasicSize(Small) == ExtendedSize(Small)", basic_small == extended_small);
    report("ExtendedSize(Small) == BasicSize(Small)", extended_small == basic_small);
    Ok(())
}
