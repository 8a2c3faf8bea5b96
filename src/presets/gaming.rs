//! 게임 (gaming & entertainment) preset.

use crate::color::generate_color_scale;
use crate::spec::*;

pub fn gaming_preset(tone: BrandTone) -> DesignSystemSpec {
    DesignSystemSpec {
        meta: Meta {
            industry: "게임".to_string(),
            brand_tone: tone.as_str().to_string(),
            style_keywords: strings(&["흥미", "몰입", "에너지", "경쟁", "재미"]),
            target_feeling: "게임의 즐거움과 흥분을 전달하는 역동적인 플랫폼".to_string(),
        },

        figma_guide: FigmaGuide {
            pages: strings(&[
                "🎨 Design System",
                "🎮 Game Components",
                "🏆 Leaderboard & Stats",
                "📱 Mobile Gaming",
                "💎 Shop & Items",
            ]),
            naming_rule: "Component/Level/State (예: GameCard/Epic/Active)".to_string(),
            auto_layout_rules: AutoLayoutRules {
                grid: "12-column grid, 16px gutter".to_string(),
                spacing_scale: vec![4, 8, 12, 16, 20, 24, 32, 40, 48, 64],
                radius_scale: vec![8, 12, 16, 20, 24, 32],
                type_scale_tokens: strings(&[
                    "text-xs", "text-sm", "text-base", "text-lg", "text-xl", "text-2xl",
                    "text-3xl", "text-4xl", "text-5xl",
                ]),
                breakpoints: strings(&[
                    "mobile: 375px",
                    "tablet: 768px",
                    "desktop: 1440px",
                    "wide: 1920px",
                ]),
            },
        },

        layout: Layout {
            header: LayoutHeader {
                height_px: 64,
                structure: strings(&["Logo", "Games", "Store", "Community", "Profile", "Wallet"]),
                sticky_behavior: "sticky with glow effect".to_string(),
                desktop: HeaderDesktop {
                    padding_x: "px-6 lg:px-12".to_string(),
                    max_width: "max-w-[1600px]".to_string(),
                    nav_items: 6,
                },
                mobile: HeaderMobile {
                    pattern: "Bottom game controls".to_string(),
                    height_px: 60,
                },
                tailwind_example: "bg-gray-900 border-b border-purple-500/30 sticky top-0 z-50 h-16 flex items-center justify-between px-6".to_string(),
            },

            hero: LayoutHero {
                structure: strings(&[
                    "Dynamic Video/Animation",
                    "Play Now CTA",
                    "Featured Game",
                    "Trending Badge",
                ]),
                desktop_grid: "Full-screen immersive".to_string(),
                mobile_stack: "portrait with prominent CTA".to_string(),
                padding: "py-0 (full-screen)".to_string(),
                background: "Animated gaming visuals, neon effects".to_string(),
                image_style: "Game screenshots, action-packed, vibrant".to_string(),
                tailwind_example: "relative h-screen bg-gradient-to-br from-purple-900 via-pink-900 to-red-900".to_string(),
            },

            footer: LayoutFooter {
                structure: strings(&["Games", "Community", "Support", "Social"]),
                legal_items: strings(&["이용약관", "개인정보처리방침", "게임물등급", "청소년보호정책"]),
                tailwind_example: "bg-gray-950 text-gray-400 py-16 px-6 mt-24".to_string(),
            },

            sections: vec![
                Section::new(
                    "Featured Games",
                    "인기 게임 강조",
                    "Large cards with video autoplay on hover",
                    "py-20 px-6 grid md:grid-cols-3 gap-8",
                ),
                Section::new(
                    "Live Tournaments",
                    "실시간 토너먼트 홍보",
                    "Live status badges, countdown timers",
                    "bg-gradient-to-r from-red-600 to-orange-600 py-16 px-6",
                ),
                Section::new(
                    "Top Players",
                    "리더보드로 경쟁심 자극",
                    "Ranking table with animated transitions",
                    "py-20 px-6 max-w-5xl mx-auto",
                ),
                Section::new(
                    "Game Store",
                    "아이템/게임 구매 유도",
                    "Grid with rarity badges and prices",
                    "py-20 px-6 grid md:grid-cols-4 gap-6",
                ),
                Section::new(
                    "Community Highlights",
                    "커뮤니티 활성화",
                    "User-generated content showcase",
                    "bg-gray-900 py-20 px-6 space-y-12",
                ),
            ],
        },

        colors: Colors {
            primary: generate_color_scale("#A855F7"),
            secondary: generate_color_scale("#EC4899"),
            gray: generate_color_scale("#71717A"),
            usage_rules: UsageRules {
                primary_use: "Play Now, 주요 CTA, 레벨업 효과".to_string(),
                secondary_use: "보상, 특별 아이템, 강조".to_string(),
                surface_bg: "gray-900 for dark gaming theme".to_string(),
                border: "purple-500/30 for neon glow effect".to_string(),
                text_strong: "white for maximum contrast on dark".to_string(),
                text_weak: "gray-400 for secondary info".to_string(),
            },
            accessibility_notes: strings(&[
                "다크 테마 기본, 높은 명도 대비 필수",
                "애니메이션은 prefers-reduced-motion 고려",
                "컬러블라인드 모드 옵션 제공",
            ]),
        },

        typography: Typography {
            font_family: FontFamily {
                primary: "Pretendard".to_string(),
                fallback: "system-ui".to_string(),
                alt_suggestion: "Rajdhani (게이밍 특화) 또는 Chakra Petch".to_string(),
            },
            scale: TypeScale {
                h1: TypographyScale::new("60px", 900, "1.1", "-0.02em"),
                h2: TypographyScale::new("44px", 800, "1.2", "-0.01em"),
                h3: TypographyScale::new("32px", 700, "1.3", "0"),
                body: TypographyScale::new("16px", 500, "1.6", "0"),
                caption: TypographyScale::new("14px", 500, "1.5", "0.02em"),
            },
        },

        components: Components {
            button: ButtonSet {
                primary: PrimaryButton {
                    height_px: 52,
                    padding: "px-8 py-3.5".to_string(),
                    radius: "rounded-xl".to_string(),
                    bg: "bg-gradient-to-r from-purple-600 to-pink-600".to_string(),
                    text: "text-white font-bold uppercase tracking-wide".to_string(),
                    hover: "hover:from-purple-700 hover:to-pink-700 hover:scale-105 hover:shadow-2xl hover:shadow-purple-500/50 transition-all duration-200".to_string(),
                    disabled: "disabled:opacity-50 disabled:scale-100".to_string(),
                    tailwind: "bg-gradient-to-r from-purple-600 to-pink-600 text-white font-bold uppercase tracking-wide px-8 py-3.5 rounded-xl hover:from-purple-700 hover:to-pink-700 hover:scale-105 hover:shadow-2xl hover:shadow-purple-500/50 transition-all".to_string(),
                },
                secondary: SecondaryButton {
                    height_px: 52,
                    padding: "px-8 py-3.5".to_string(),
                    radius: "rounded-xl".to_string(),
                    border: "border-2 border-purple-500".to_string(),
                    bg: None,
                    text: "text-purple-400 font-bold uppercase tracking-wide".to_string(),
                    hover: "hover:bg-purple-500/10 hover:border-purple-400 transition-all duration-200".to_string(),
                    disabled: "disabled:opacity-50".to_string(),
                    tailwind: "border-2 border-purple-500 text-purple-400 font-bold uppercase tracking-wide px-8 py-3.5 rounded-xl hover:bg-purple-500/10 hover:border-purple-400 transition-all".to_string(),
                },
            },
            input: Input {
                height_px: 48,
                radius: "rounded-xl".to_string(),
                border: "border-2 border-gray-700".to_string(),
                placeholder: "placeholder:text-gray-500".to_string(),
                focus_ring: "focus:ring-2 focus:ring-purple-500 focus:border-purple-500 bg-gray-800".to_string(),
                tailwind: "w-full h-12 px-4 bg-gray-800 border-2 border-gray-700 rounded-xl focus:ring-2 focus:ring-purple-500 text-white".to_string(),
            },
            card: Card {
                radius: "rounded-2xl".to_string(),
                padding: "p-0".to_string(),
                shadow: "shadow-xl shadow-purple-900/30 hover:shadow-2xl hover:shadow-purple-500/40 transition-all duration-300".to_string(),
                border: "border border-gray-800".to_string(),
                tailwind: "bg-gray-900 rounded-2xl overflow-hidden border border-gray-800 shadow-xl shadow-purple-900/30 hover:shadow-2xl hover:shadow-purple-500/40 transition-all cursor-pointer".to_string(),
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
                header: "bg-gray-900 border-b border-purple-500/30 sticky top-0 z-50 h-16 flex items-center justify-between px-6".to_string(),
                hero: "relative h-screen bg-gradient-to-br from-purple-900 via-pink-900 to-red-900".to_string(),
                primary_button: "bg-gradient-to-r from-purple-600 to-pink-600 text-white font-bold uppercase tracking-wide px-8 py-3.5 rounded-xl hover:scale-105 hover:shadow-2xl hover:shadow-purple-500/50 transition-all".to_string(),
                secondary_button: "border-2 border-purple-500 text-purple-400 font-bold uppercase px-8 py-3.5 rounded-xl hover:bg-purple-500/10".to_string(),
                card: "bg-gray-900 rounded-2xl overflow-hidden border border-gray-800 shadow-xl hover:shadow-2xl hover:shadow-purple-500/40 transition-all cursor-pointer".to_string(),
                input: "w-full h-12 px-4 bg-gray-800 border-2 border-gray-700 rounded-xl focus:ring-2 focus:ring-purple-500 text-white".to_string(),
                thumbnail: None,
                poster: None,
            },
            implementation_notes: strings(&[
                "다크 모드 기본, 네온 글로우 효과 적극 활용",
                "hover 애니메이션으로 인터랙티브한 느낌",
                "실시간 데이터는 WebSocket으로 라이브 업데이트",
                "파티클 효과, 그라디언트로 역동적 분위기",
            ]),
        },

        variation_summary: VariationSummary {
            changed_points: vec![
                VariationPoint::new(
                    "Colors",
                    "다크 테마 + 퍼플/핑크 네온",
                    "게임은 몰입을 위한 다크 테마가 기본. 네온 컬러로 에너지와 흥분",
                ),
                VariationPoint::new(
                    "Typography",
                    "매우 굵은 폰트 (900 weight)",
                    "임팩트와 강렬함 표현. 게임의 역동성",
                ),
                VariationPoint::new(
                    "Components",
                    "그라디언트 + 글로우 섀도우",
                    "미래적이고 화려한 게이밍 스타일",
                ),
                VariationPoint::new(
                    "Layout",
                    "풀스크린 immersive 경험",
                    "게임은 완전한 몰입이 중요",
                ),
            ],
            unchanged_principles: strings(&[
                "반응형 grid 시스템",
                "접근성 기준 (다크 테마에서)",
                "Mobile-first 접근",
                "일관된 spacing",
            ]),
        },
    }
}
