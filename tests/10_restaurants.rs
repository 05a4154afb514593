mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn list_restaurants_empty_then_populated() -> Result<()> {
    let server = common::TestServer::start().await?;

    let res = server.client.get(server.url("/restaurants")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!([]));

    server.restaurant("Karen's Pizza Shack", "address1").await?;
    server.restaurant("Sanjay's Pizza", "address2").await?;

    let res = server.client.get(server.url("/restaurants")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(
        body,
        json!([
            { "id": 1, "name": "Karen's Pizza Shack", "address": "address1" },
            { "id": 2, "name": "Sanjay's Pizza", "address": "address2" },
        ])
    );

    Ok(())
}

#[tokio::test]
async fn unknown_restaurant_is_404_for_get_and_delete() -> Result<()> {
    let server = common::TestServer::start().await?;
    server.restaurant("Kiki's Pizza", "address3").await?;

    for id in ["0", "2", "999", "+1"] {
        let res = server.client.get(server.url(&format!("/restaurants/{}", id))).send().await?;
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "GET /restaurants/{}", id);
        assert_eq!(res.json::<Value>().await?, json!({ "error": "Restaurant not found" }));

        let res = server.client.delete(server.url(&format!("/restaurants/{}", id))).send().await?;
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "DELETE /restaurants/{}", id);
        assert_eq!(res.json::<Value>().await?, json!({ "error": "Restaurant not found" }));
    }

    Ok(())
}

#[tokio::test]
async fn show_restaurant_nests_its_pizzas() -> Result<()> {
    let server = common::TestServer::start().await?;
    let restaurant = server.restaurant("Karen's Pizza Shack", "address1").await?;
    let other = server.restaurant("Sanjay's Pizza", "address2").await?;
    let emma = server.pizza("Emma", "Dough, Tomato Sauce, Cheese").await?;
    let geri = server.pizza("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni").await?;
    server.restaurant_pizza(10, emma.id, restaurant.id).await?;
    server.restaurant_pizza(12, geri.id, restaurant.id).await?;
    server.restaurant_pizza(8, geri.id, other.id).await?;

    let res = server
        .client
        .get(server.url(&format!("/restaurants/{}", restaurant.id)))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<Value>().await?;
    assert_eq!(body["id"], json!(restaurant.id));
    assert_eq!(body["name"], json!("Karen's Pizza Shack"));
    assert_eq!(body["address"], json!("address1"));

    let rps = body["restaurant_pizzas"].as_array().expect("restaurant_pizzas array");
    assert_eq!(rps.len(), 2);
    assert_eq!(rps[0]["price"], json!(10));
    assert_eq!(
        rps[0]["pizza"],
        json!({ "id": emma.id, "name": "Emma", "ingredients": "Dough, Tomato Sauce, Cheese" })
    );
    assert_eq!(rps[1]["pizza"]["name"], json!("Geri"));
    for rp in rps {
        assert_eq!(rp["restaurant_id"], json!(restaurant.id));
        assert_eq!(
            rp["restaurant"],
            json!({ "id": restaurant.id, "name": "Karen's Pizza Shack", "address": "address1" })
        );
    }

    Ok(())
}

#[tokio::test]
async fn delete_restaurant_removes_its_pizzas() -> Result<()> {
    let server = common::TestServer::start().await?;
    let doomed = server.restaurant("Doomed Pies", "1 Lost Rd").await?;
    let kept = server.restaurant("Kept Pies", "2 Safe St").await?;
    let pizza = server.pizza("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard").await?;
    for price in [3, 4, 5] {
        server.restaurant_pizza(price, pizza.id, doomed.id).await?;
    }
    server.restaurant_pizza(6, pizza.id, kept.id).await?;

    let res = server
        .client
        .delete(server.url(&format!("/restaurants/{}", doomed.id)))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert!(res.bytes().await?.is_empty());

    assert_eq!(server.count("restaurants").await?, 1);
    assert_eq!(server.count("restaurant_pizzas").await?, 1);
    // Pizzas are not owned by the restaurant
    assert_eq!(server.count("pizzas").await?, 1);

    let res = server
        .client
        .get(server.url(&format!("/restaurants/{}", doomed.id)))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn concurrent_creates_and_deletes_never_fail_with_500() -> Result<()> {
    let server = common::TestServer::start().await?;
    let pizza = server.pizza("Emma", "Dough, Tomato Sauce, Cheese").await?;

    let mut ids = Vec::new();
    for n in 0..20 {
        ids.push(server.restaurant(&format!("Shop {}", n), "Somewhere").await?.id);
    }

    let mut tasks = tokio::task::JoinSet::new();
    for id in ids.iter().copied() {
        let client = server.client.clone();
        let url = server.url("/restaurant_pizzas");
        let body = json!({ "price": 10, "pizza_id": pizza.id, "restaurant_id": id });
        tasks.spawn(async move {
            let res = client.post(url).json(&body).send().await?;
            Ok::<_, reqwest::Error>(("POST", res.status()))
        });

        let client = server.client.clone();
        let url = server.url(&format!("/restaurants/{}", id));
        tasks.spawn(async move {
            let res = client.delete(url).send().await?;
            Ok::<_, reqwest::Error>(("DELETE", res.status()))
        });
    }

    let mut deletes_ok = 0;
    while let Some(joined) = tasks.join_next().await {
        let (method, status) = joined??;
        assert!(
            [StatusCode::CREATED, StatusCode::NO_CONTENT, StatusCode::BAD_REQUEST].contains(&status),
            "{} answered {}",
            method,
            status
        );
        if method == "DELETE" {
            assert_eq!(status, StatusCode::NO_CONTENT, "every restaurant existed");
            deletes_ok += 1;
        }
    }
    assert_eq!(deletes_ok, 20);

    // Creates that lost the race were rolled back; nothing points at a deleted restaurant
    assert_eq!(server.count("restaurants").await?, 0);
    assert_eq!(server.count("restaurant_pizzas").await?, 0);

    Ok(())
}
