use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home">
            <h1>"Order Desk"</h1>
            <div class="home-grid">
                <a class="home-card" href="#/orders">
                    <h2>"My Orders ->"</h2>
                    <p>"Open to manage my orders"</p>
                </a>
                <a class="home-card" href="#/products">
                    <h2>"Products ->"</h2>
                    <p>"Open to manage the products"</p>
                </a>
            </div>
        </section>
    }
}
