//! Console walk-through of a booking submission
//!
//! Fills the form, submits it once with a missing field and once complete,
//! and prints every toast the form raises.
//!
//! ```sh
//! RUST_LOG=booking=debug cargo run --example console_booking
//! ```

use anyhow::Result;
use booking::prelude::*;
use chrono::Days;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("booking=info")),
        )
        .init();

    println!("🏨 Booking Form Example\n");

    let toasts = ToastBus::default();
    let mut rx = toasts.subscribe();
    let printer = tokio::spawn(async move {
        while let Ok(toast) = rx.recv().await {
            let marker = if toast.notification.is_destructive() { "❌" } else { "✅" };
            println!(
                "{} [{}] {}: {}",
                marker,
                toast.timestamp.format("%H:%M:%S"),
                toast.notification.title,
                toast.notification.description
            );
        }
    });

    let repository = InMemoryBookingRepository::new();
    let form = BookingForm::new(repository.clone(), toasts);

    println!("📋 Default values: {:?}\n", form.values());

    form.update(|v| {
        v.name = "Ada Lovelace".to_string();
        v.email = "ada@example.com".to_string();
    })?;

    match form.handle_submit(|_| Ok(())).await {
        Err(BookingError::Validation(e)) => {
            println!("⚠️  Not submitted:");
            for field in e.errors() {
                println!("   - {}: {}", field.field, field.message);
            }
            println!();
        }
        other => println!("unexpected outcome: {:?}\n", other),
    }

    form.update(|v| {
        v.phone = "+44 20 7946 0958".to_string();
        v.adults = "2".to_string();
        v.children = "1".to_string();
        v.check_out_date = v.check_in_date + Days::new(3);
    })?;

    let submitted = form
        .handle_submit(|submitted| {
            println!(
                "📨 Parent view received booking #{} ({})",
                submitted.booking_id, submitted.booking_reference
            );
            Ok(())
        })
        .await?;

    println!("\n📦 Stored rows:");
    for row in repository.list()? {
        println!(
            "   #{} {} {} x{} adults, {} nights [{}]",
            row.id,
            row.booking_reference,
            row.name,
            row.adults,
            row.nights(),
            row.status
        );
    }

    println!(
        "\n🔄 Form reset after success: name = {:?}, phase = {:?}",
        form.values().name,
        form.phase()
    );
    println!("\n🎉 Done: {}", submitted.booking_reference);

    drop(form);
    let _ = printer.await;
    Ok(())
}
