//! File templates for generated artifacts

use crate::utils::{capitalize, controller_class, slug};

/// Controller object exposing `index` and `submit` actions
pub fn controller(name: &str) -> String {
    let class_name = controller_class(name);
    let title = capitalize(name);

    format!(
        r#"// app/Controllers/{class_name}.js
window.{class_name} = {{
    // Data to be available in the view
    async index() {{
        return {{
            title: '{title} Page',
            message: 'Welcome to {title}'
        }};
    }},

    // Example action
    async submit() {{
        console.log('{class_name} action triggered');
    }}
}};
"#
    )
}

/// View page bound to a controller's `title` and `message`
pub fn view(name: &str) -> String {
    let title = capitalize(name);

    format!(
        r#"<!-- title: {title} -->
<layout name="main">
    <slot name="content">
        <div class="container mx-auto px-4 py-8">
            <h1 class="text-3xl font-bold mb-4" x-text="title"></h1>
            <p class="text-gray-600" x-text="message"></p>
        </div>
    </slot>
</layout>
"#
    )
}

/// Reusable component with a default slot
pub fn component(name: &str) -> String {
    let file = slug(name);
    let title = capitalize(name);

    format!(
        r#"<!-- app/Components/{file}.html -->
<div class="p-4 bg-white rounded-lg shadow" x-data="{{ open: false }}">
    <h3 class="font-bold text-lg mb-2">{title} Component</h3>
    <slot></slot>
</div>
"#
    )
}
