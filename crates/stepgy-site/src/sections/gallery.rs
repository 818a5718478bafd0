use leptos::*;
use stepgy_core::content::{Gallery, GalleryCategory};

#[component]
pub fn GallerySection(gallery: Gallery) -> impl IntoView {
    let Gallery { title, subtitle, categories } = gallery;
    let categories = categories.into_iter().map(render_category).collect_view();

    view! {
        <div class="container mx-auto px-4">
            <div class="text-center mb-12">
                <h2 class="text-4xl font-bold text-gray-900">{title}</h2>
                <p class="text-lg text-gray-600 mt-4">{subtitle}</p>
            </div>
            <div class="space-y-12">
                {categories}
            </div>
        </div>
    }
}

fn render_category(category: GalleryCategory) -> impl IntoView {
    let GalleryCategory { name, images } = category;
    let images = images
        .into_iter()
        .enumerate()
        .map(|(index, src)| {
            let alt = format!("{} {}", name, index + 1);
            view! {
                <img src=src alt=alt class="w-full h-48 object-cover rounded-lg shadow" loading="lazy"/>
            }
        })
        .collect_view();

    view! {
        <div>
            <h3 class="text-2xl font-semibold text-gray-900 mb-4">{name}</h3>
            <div class="grid md:grid-cols-3 gap-4">
                {images}
            </div>
        </div>
    }
}
