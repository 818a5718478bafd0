use leptos::*;
use stepgy_core::content::Prototype;

#[component]
pub fn PrototypeSection(prototype: Prototype) -> impl IntoView {
    let Prototype { title, content, images } = prototype;
    let images = images
        .into_iter()
        .enumerate()
        .map(|(index, src)| {
            view! {
                <img
                    src=src
                    alt=format!("Prototipo {}", index + 1)
                    class="w-full h-64 object-cover rounded-xl shadow-lg"
                    loading="lazy"
                />
            }
        })
        .collect_view();

    view! {
        <div class="container mx-auto px-4">
            <div class="text-center max-w-3xl mx-auto mb-12">
                <h2 class="text-4xl font-bold text-gray-900">{title}</h2>
                <p class="text-lg text-gray-600 mt-4">{content}</p>
            </div>
            <div class="grid md:grid-cols-3 gap-6">
                {images}
            </div>
        </div>
    }
}
