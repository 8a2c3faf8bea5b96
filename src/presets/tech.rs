//! 테크/SaaS (tech) preset. Also the fallback when nothing matches.

use crate::color::generate_color_scale;
use crate::spec::*;

pub fn tech_preset(tone: BrandTone) -> DesignSystemSpec {
    DesignSystemSpec {
        meta: Meta {
            industry: "테크/SaaS".to_string(),
            brand_tone: tone.as_str().to_string(),
            style_keywords: strings(&["혁신", "효율", "스마트", "미래지향", "간결함"]),
            target_feeling: "최신 기술과 효율적인 솔루션을 제공하는 혁신적인 플랫폼이라는 인상".to_string(),
        },

        figma_guide: FigmaGuide {
            pages: strings(&[
                "🎨 Design System",
                "💻 Product UI",
                "📊 Dashboard Components",
                "📱 Mobile App",
                "🎯 Marketing Pages",
            ]),
            naming_rule: "Component/Variant/State (예: Dashboard/Widget/Active)".to_string(),
            auto_layout_rules: AutoLayoutRules {
                grid: "12-column grid, 24px gutter".to_string(),
                spacing_scale: vec![4, 8, 12, 16, 20, 24, 32, 40, 48, 64, 80],
                radius_scale: vec![6, 8, 12, 16, 20, 24],
                type_scale_tokens: strings(&[
                    "text-xs", "text-sm", "text-base", "text-lg", "text-xl", "text-2xl",
                    "text-3xl", "text-4xl", "text-5xl",
                ]),
                breakpoints: strings(&[
                    "mobile: 375px",
                    "tablet: 768px",
                    "laptop: 1024px",
                    "desktop: 1440px",
                    "wide: 1920px",
                ]),
            },
        },

        layout: Layout {
            header: LayoutHeader {
                height_px: 64,
                structure: strings(&[
                    "Logo",
                    "Product Menu",
                    "Resources",
                    "Pricing",
                    "Login",
                    "Sign Up CTA",
                ]),
                sticky_behavior: "sticky with blur backdrop on scroll".to_string(),
                desktop: HeaderDesktop {
                    padding_x: "px-6 lg:px-12".to_string(),
                    max_width: "max-w-[1600px]".to_string(),
                    nav_items: 5,
                },
                mobile: HeaderMobile {
                    pattern: "Minimal hamburger with slide-in menu".to_string(),
                    height_px: 60,
                },
                tailwind_example: "backdrop-blur-lg bg-white/80 sticky top-0 z-50 h-16 flex items-center justify-between px-6 border-b border-gray-200/50".to_string(),
            },

            hero: LayoutHero {
                structure: strings(&[
                    "Headline",
                    "Subheadline",
                    "Primary CTA",
                    "Secondary CTA",
                    "Product Screenshot/Demo",
                ]),
                desktop_grid: "Centered text with floating product UI".to_string(),
                mobile_stack: "vertical, CTA first".to_string(),
                padding: "py-20 md:py-32 lg:py-40".to_string(),
                background: "Animated gradient with mesh background".to_string(),
                image_style: "Modern dashboard UI with glassmorphism effects".to_string(),
                tailwind_example: "relative bg-gradient-to-br from-primary-600 via-purple-600 to-pink-500 py-20 md:py-32 lg:py-40 px-6 text-center overflow-hidden".to_string(),
            },

            footer: LayoutFooter {
                structure: strings(&["Product", "Company", "Resources", "Social", "Newsletter"]),
                legal_items: strings(&["Terms", "Privacy", "Security", "Compliance"]),
                tailwind_example: "bg-gray-900 text-gray-300 py-16 px-6 border-t border-gray-800".to_string(),
            },

            sections: vec![
                Section::new(
                    "Features Showcase",
                    "핵심 기능을 시각적으로 강조",
                    "Bento grid layout with mixed sizes",
                    "py-24 px-6 grid md:grid-cols-6 gap-4 auto-rows-fr",
                ),
                Section::new(
                    "Integration Partners",
                    "연동 가능한 서비스 신뢰도 강화",
                    "Logo cloud with infinite scroll animation",
                    "bg-gray-50 py-16 px-6 overflow-hidden",
                ),
                Section::new(
                    "Testimonials",
                    "실제 사용 후기로 전환율 향상",
                    "Card marquee with user info and company logos",
                    "py-24 px-6 space-y-8",
                ),
                Section::new(
                    "Pricing Tiers",
                    "명확한 가격 정책으로 의사결정 지원",
                    "3-column comparison table, centered highlight",
                    "py-24 px-6 grid md:grid-cols-3 gap-8",
                ),
                Section::new(
                    "CTA Section",
                    "무료 체험 또는 데모 신청 유도",
                    "Centered with email capture form",
                    "bg-gradient-to-r from-primary-600 to-purple-600 py-20 px-6 text-center text-white",
                ),
                Section::new(
                    "FAQ",
                    "기술적 질문 해소",
                    "Accordion with search functionality",
                    "py-24 px-6 max-w-3xl mx-auto",
                ),
            ],
        },

        colors: Colors {
            primary: generate_color_scale("#6366F1"),
            secondary: generate_color_scale("#8B5CF6"),
            gray: generate_color_scale("#64748B"),
            usage_rules: UsageRules {
                primary_use: "Primary CTA, active states, brand elements".to_string(),
                secondary_use: "Secondary actions, hover effects, accents".to_string(),
                surface_bg: "white for cards, gray-50 for sections, gray-900 for dark mode".to_string(),
                border: "gray-200 in light mode, gray-800 in dark mode".to_string(),
                text_strong: "gray-900 (light) / white (dark)".to_string(),
                text_weak: "gray-600 (light) / gray-400 (dark)".to_string(),
            },
            accessibility_notes: strings(&[
                "Primary-600과 white는 4.5:1 대비로 AA 충족",
                "Dark mode에서도 동일한 접근성 기준 적용",
                "Interactive elements는 focus-visible로 키보드 접근성 확보",
            ]),
        },

        typography: Typography {
            font_family: FontFamily {
                primary: "Pretendard".to_string(),
                fallback: "system-ui".to_string(),
                alt_suggestion: "SF Pro Display (Apple ecosystem) 또는 Inter (글로벌 SaaS 표준)".to_string(),
            },
            scale: TypeScale {
                h1: TypographyScale::new("56px", 800, "1.1", "-0.03em"),
                h2: TypographyScale::new("40px", 700, "1.2", "-0.02em"),
                h3: TypographyScale::new("28px", 600, "1.3", "-0.01em"),
                body: TypographyScale::new("16px", 400, "1.7", "0"),
                caption: TypographyScale::new("14px", 500, "1.5", "0"),
            },
        },

        components: Components {
            button: ButtonSet {
                primary: PrimaryButton {
                    height_px: 44,
                    padding: "px-6 py-2.5".to_string(),
                    radius: "rounded-lg".to_string(),
                    bg: "bg-primary-600".to_string(),
                    text: "text-white font-semibold".to_string(),
                    hover: "hover:bg-primary-700 hover:shadow-lg hover:-translate-y-0.5 transition-all duration-200".to_string(),
                    disabled: "disabled:bg-gray-300 disabled:transform-none".to_string(),
                    tailwind: "bg-primary-600 text-white font-semibold px-6 py-2.5 rounded-lg hover:bg-primary-700 hover:shadow-lg hover:-translate-y-0.5 transition-all duration-200".to_string(),
                },
                secondary: SecondaryButton {
                    height_px: 44,
                    padding: "px-6 py-2.5".to_string(),
                    radius: "rounded-lg".to_string(),
                    border: "border border-gray-300".to_string(),
                    bg: None,
                    text: "text-gray-700 font-medium".to_string(),
                    hover: "hover:bg-gray-50 hover:border-gray-400 transition-colors duration-200".to_string(),
                    disabled: "disabled:bg-gray-100 disabled:text-gray-400".to_string(),
                    tailwind: "border border-gray-300 text-gray-700 font-medium px-6 py-2.5 rounded-lg hover:bg-gray-50 hover:border-gray-400".to_string(),
                },
            },
            input: Input {
                height_px: 44,
                radius: "rounded-lg".to_string(),
                border: "border border-gray-300".to_string(),
                placeholder: "placeholder:text-gray-400".to_string(),
                focus_ring: "focus:ring-2 focus:ring-primary-500/50 focus:border-primary-500".to_string(),
                tailwind: "w-full h-11 px-4 border border-gray-300 rounded-lg focus:ring-2 focus:ring-primary-500/50 focus:border-primary-500".to_string(),
            },
            card: Card {
                radius: "rounded-2xl".to_string(),
                padding: "p-6".to_string(),
                shadow: "shadow-sm hover:shadow-2xl transition-shadow duration-300".to_string(),
                border: "border border-gray-200".to_string(),
                tailwind: "bg-white rounded-2xl p-6 border border-gray-200 shadow-sm hover:shadow-2xl transition-shadow duration-300".to_string(),
            },
        },

        tailwind_mapping: TailwindMapping {
            tailwind_config_extend: TailwindConfigExtend {
                colors: TailwindColors {
                    primary: "colors.primary".to_string(),
                    secondary: "colors.secondary".to_string(),
                    gray: "colors.gray".to_string(),
                },
                font_family: TailwindFontFamily {
                    sans: strings(&["Pretendard", "system-ui"]),
                },
                aspect_ratio: None,
            },
            class_snippets: ClassSnippets {
                container: "max-w-[1600px] mx-auto px-6 lg:px-12".to_string(),
                header: "backdrop-blur-lg bg-white/80 sticky top-0 z-50 h-16 flex items-center justify-between px-6 border-b border-gray-200/50".to_string(),
                hero: "relative bg-gradient-to-br from-primary-600 via-purple-600 to-pink-500 py-20 md:py-32 px-6 text-center".to_string(),
                primary_button: "bg-primary-600 text-white font-semibold px-6 py-2.5 rounded-lg hover:bg-primary-700 hover:shadow-lg hover:-translate-y-0.5 transition-all".to_string(),
                secondary_button: "border border-gray-300 text-gray-700 font-medium px-6 py-2.5 rounded-lg hover:bg-gray-50".to_string(),
                card: "bg-white rounded-2xl p-6 border border-gray-200 shadow-sm hover:shadow-2xl transition-shadow".to_string(),
                input: "w-full h-11 px-4 border border-gray-300 rounded-lg focus:ring-2 focus:ring-primary-500/50".to_string(),
                thumbnail: None,
                poster: None,
            },
            implementation_notes: strings(&[
                "Framer Motion 사용으로 부드러운 애니메이션 구현",
                "backdrop-blur로 glassmorphism 효과 활용",
                "Dark mode 지원을 위한 CSS variables 설정",
                "Micro-interactions로 프리미엄 느낌 강화",
            ]),
        },

        variation_summary: VariationSummary {
            changed_points: vec![
                VariationPoint::new(
                    "Colors",
                    "primary가 인디고/보라 계열(#6366F1)",
                    "테크 업계는 혁신과 미래를 상징하는 보라/인디고 톤 선호. 차별화된 브랜드 이미지",
                ),
                VariationPoint::new(
                    "Typography",
                    "h1 폰트 크기가 매우 큼(56px) & 굵음(800)",
                    "강렬한 첫인상과 임팩트 있는 메시지 전달. SaaS 랜딩페이지의 표준",
                ),
                VariationPoint::new(
                    "Components",
                    "hover 시 -translate-y 효과 적용",
                    "마이크로 인터랙션으로 프리미엄하고 반응적인 경험 제공",
                ),
                VariationPoint::new(
                    "Layout",
                    "Hero에 gradient 배경과 애니메이션",
                    "시선을 사로잡는 현대적 디자인. 제품의 혁신성을 시각적으로 표현",
                ),
                VariationPoint::new(
                    "Header",
                    "backdrop-blur 효과 사용",
                    "Glassmorphism 트렌드 반영. 세련되고 현대적인 느낌",
                ),
            ],
            unchanged_principles: strings(&[
                "12-column responsive grid 시스템",
                "Mobile-first 접근 방식",
                "WCAG 접근성 기준 준수",
                "일관된 spacing 및 typography scale",
            ]),
        },
    }
}
