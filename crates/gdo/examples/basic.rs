//! Basic usage example for gdo
//!
//! Run with: cargo run --example basic -p gdo
//!
//! Set the connection in a .env file or the environment:
//! GDO_USER=postgres GDO_PASSWORD=postgres GDO_DB_NAME=gdo_example

use gdo::{FromRow, Gdo, GdoError, NullString, Protocol, Record, insert_fragment, update_fragment};

#[derive(Debug, Default, Record, FromRow)]
struct Product {
    sku: String,
    #[gdo(column = "display_name")]
    name: String,
    price_cents: i64,
    note: NullString,
}

#[tokio::main]
async fn main() -> Result<(), GdoError> {
    dotenvy::dotenv().ok();

    let protocol = Protocol::from_env()?;
    println!("connecting with {protocol:?}");
    let conn = protocol.connect().await?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS products (
            sku TEXT PRIMARY KEY,
            display_name TEXT NOT NULL DEFAULT '',
            price_cents BIGINT NOT NULL DEFAULT 0,
            note TEXT
        )",
        &[],
    )
    .await?;
    conn.execute("DELETE FROM products", &[]).await?;

    // Only populated fields are written.
    let widget = Product {
        sku: "W-1".into(),
        name: "Widget".into(),
        ..Product::default()
    };
    let ins = insert_fragment(&widget, &Product::field_map());
    let sql = ins.insert_sql("products");
    println!("{sql}");
    conn.execute(&sql, &ins.args).await?;

    // Patch the price and set the note; everything else is left untouched.
    let patch = Product {
        price_cents: 1999,
        note: NullString::valid("launch price".into()),
        ..Product::default()
    };
    let mut upd = update_fragment(&patch, &Product::field_map());
    let sku = widget.sku.clone();
    upd.push_arg(&sku);
    let sql = upd.update_sql("products", "sku = ?");
    println!("{sql}");
    conn.execute(&sql, &upd.args).await?;

    let products: Vec<Product> = conn
        .query_as(
            "SELECT sku, display_name, price_cents, note FROM products ORDER BY sku",
            &[],
        )
        .await?;
    for p in &products {
        println!("{p:?}");
    }

    println!(
        "note as JSON: {}",
        serde_json::to_string(&products[0].note).map_err(GdoError::from)?
    );

    conn.close().await?;
    Ok(())
}
