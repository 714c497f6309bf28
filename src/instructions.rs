use crate::site::ThemeStatus;

const RULE: &str = "--------------------------------------------------";

/// The follow-up steps printed after a successful install.
///
/// The activation step is dropped when the site config already selects `theme_name`.
pub fn render(theme_name: &str, status: &ThemeStatus) -> String {
    let mut steps = vec![
        "Install Tailwind CSS (Hugo ships PostCSS support, the npm packages are still needed):\n   \
         npm init -y\n   \
         npm install -D tailwindcss postcss autoprefixer @tailwindcss/typography"
            .to_string(),
        "Initialize the Tailwind config:\n   npx tailwindcss init".to_string(),
        format!(
            "Point tailwind.config.js at the theme layouts:\n\n   \
             module.exports = {{\n     \
               content: [\"./layouts/**/*.html\", \"./themes/{theme_name}/layouts/**/*.html\"],\n     \
               theme: {{\n       \
                 extend: {{}},\n     \
               }},\n     \
               plugins: [require('@tailwindcss/typography')],\n   \
             }}\n"
        ),
    ];

    if *status != ThemeStatus::Active {
        steps.push(format!(
            "Enable the theme in hugo.toml:\n   theme = \"{theme_name}\""
        ));
    }

    let mut out = format!("\nTheme files generated!\n{RULE}\nNext steps:\n");

    for (i, step) in steps.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, step));
    }

    if *status == ThemeStatus::Active {
        out.push_str(&format!("The site config already uses \"{theme_name}\".\n"));
    }

    out.push_str(RULE);

    out
}
