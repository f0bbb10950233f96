//! Paginate Example
//!
//! Walks every page of a search against a running usersearch-server.
//!
//! Run with: cargo run --example paginate -- May

use usersearch_rs::{Client, SearchRequest};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let query = std::env::args().nth(1).unwrap_or_default();
    let client = Client::new("http://127.0.0.1:8080/", "12345");

    println!("Searching for {:?}\n", query);

    let mut offset = 0;
    let mut page_no = 1;
    loop {
        let req = SearchRequest::new(5, offset)
            .with_query(query.clone())
            .with_order_field("Age");
        let page = client.find_users(&req).await?;

        println!("📄 Page {}", page_no);
        for user in &page.users {
            println!("   {:>3}  {:<24} age {}", user.id, user.name, user.age);
        }

        if !page.next_page {
            break;
        }
        offset += page.users.len() as i64;
        page_no += 1;
    }

    Ok(())
}
