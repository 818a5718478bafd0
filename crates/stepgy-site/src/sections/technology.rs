use crate::components::{ComponentCard, IconGlyph};
use leptos::*;
use stepgy_core::content::Technology;
use stepgy_core::Icon;

#[component]
pub fn TechnologySection(technology: Technology) -> impl IntoView {
    let Technology { title, subtitle, components, performance } = technology;
    let components = components
        .into_iter()
        .map(|component| view! { <ComponentCard component=component/> })
        .collect_view();

    view! {
        <div class="container mx-auto px-4">
            <div class="text-center mb-12">
                <h2 class="text-4xl font-bold text-gray-900">{title}</h2>
                <p class="text-lg text-gray-600 mt-4">{subtitle}</p>
            </div>
            <div class="grid md:grid-cols-2 gap-6">
                {components}
            </div>
            <div class="mt-10 flex justify-center">
                <div class="inline-flex items-center space-x-3 px-6 py-3 bg-green-600 text-white rounded-full shadow-lg">
                    <IconGlyph icon=Icon::TrendingUp class="w-5 h-5"/>
                    <span class="font-semibold">{performance}</span>
                </div>
            </div>
        </div>
    }
}
