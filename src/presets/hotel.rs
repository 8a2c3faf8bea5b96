//! 호텔 (hotel & hospitality) preset.

use crate::color::generate_color_scale;
use crate::spec::*;

pub fn hotel_preset(tone: BrandTone) -> DesignSystemSpec {
    DesignSystemSpec {
        meta: Meta {
            industry: "호텔".to_string(),
            brand_tone: tone.as_str().to_string(),
            style_keywords: strings(&["럭셔리", "편안함", "환대", "품격", "휴식"]),
            target_feeling: "프리미엄 숙박 경험과 최상의 서비스를 기대하게 만드는 고급스러움".to_string(),
        },

        figma_guide: FigmaGuide {
            pages: strings(&[
                "🎨 Design System",
                "🏨 Room Gallery",
                "📅 Booking System",
                "📱 Mobile Guest",
                "⭐ Reviews & Amenities",
            ]),
            naming_rule: "Component/RoomType/State (예: RoomCard/Suite/Available)".to_string(),
            auto_layout_rules: AutoLayoutRules {
                grid: "12-column grid, 32px gutter (넓은 여백)".to_string(),
                spacing_scale: vec![8, 16, 24, 32, 40, 48, 64, 80, 96, 120],
                radius_scale: vec![4, 8, 12, 16, 20, 24],
                type_scale_tokens: strings(&[
                    "text-sm", "text-base", "text-lg", "text-xl", "text-2xl", "text-3xl",
                    "text-4xl", "text-5xl", "text-6xl",
                ]),
                breakpoints: strings(&[
                    "mobile: 375px",
                    "tablet: 768px",
                    "desktop: 1440px",
                    "wide: 2560px",
                ]),
            },
        },

        layout: Layout {
            header: LayoutHeader {
                height_px: 80,
                structure: strings(&[
                    "Logo", "Rooms", "Amenities", "Dining", "Events", "Contact", "Book Now",
                ]),
                sticky_behavior: "sticky with subtle shadow".to_string(),
                desktop: HeaderDesktop {
                    padding_x: "px-8 lg:px-16".to_string(),
                    max_width: "max-w-[1920px]".to_string(),
                    nav_items: 7,
                },
                mobile: HeaderMobile {
                    pattern: "Minimal with prominent booking".to_string(),
                    height_px: 72,
                },
                tailwind_example: "bg-white border-b border-gray-100 sticky top-0 z-50 h-20 flex items-center justify-between px-8 lg:px-16".to_string(),
            },

            hero: LayoutHero {
                structure: strings(&[
                    "Full-width Premium Photography",
                    "Check-in Widget",
                    "Welcome Message",
                    "Special Offers",
                ]),
                desktop_grid: "Full-bleed with elegant overlay".to_string(),
                mobile_stack: "vertical with booking widget".to_string(),
                padding: "py-0 (full-bleed luxury)".to_string(),
                background: "High-end hotel photography".to_string(),
                image_style: "Professional architectural photography, warm lighting".to_string(),
                tailwind_example: "relative h-screen bg-cover bg-center flex items-end justify-center pb-20".to_string(),
            },

            footer: LayoutFooter {
                structure: strings(&["Hotel Info", "Services", "Policies", "Contact"]),
                legal_items: strings(&["이용약관", "개인정보처리방침", "예약/취소규정", "호텔 정책"]),
                tailwind_example: "bg-gray-900 text-gray-300 py-20 px-8 lg:px-16 mt-32".to_string(),
            },

            sections: vec![
                Section::new(
                    "Room Gallery",
                    "객실 종류 소개",
                    "Large cards with premium photography",
                    "py-32 px-8 lg:px-16 grid md:grid-cols-2 gap-12",
                ),
                Section::new(
                    "Amenities & Services",
                    "시설 소개",
                    "Icon grid with elegant spacing",
                    "bg-gray-50 py-32 px-8 lg:px-16 grid md:grid-cols-4 gap-12",
                ),
                Section::new(
                    "Dining Experience",
                    "레스토랑/바 홍보",
                    "Full-width imagery with overlay text",
                    "py-32 px-8 lg:px-16 space-y-16",
                ),
                Section::new(
                    "Guest Reviews",
                    "실제 후기로 신뢰 구축",
                    "Testimonial cards with ratings",
                    "bg-white py-32 px-8 lg:px-16 grid md:grid-cols-3 gap-8",
                ),
                Section::new(
                    "Location & Contact",
                    "위치 및 연락처",
                    "Map integration with contact info",
                    "py-32 px-8 lg:px-16 grid md:grid-cols-2 gap-16",
                ),
            ],
        },

        colors: Colors {
            primary: generate_color_scale("#0891B2"),
            secondary: generate_color_scale("#D4AF37"),
            gray: generate_color_scale("#475569"),
            usage_rules: UsageRules {
                primary_use: "Book Now, 예약 확인, 주요 CTA".to_string(),
                secondary_use: "프리미엄 배지, 특별 서비스, 골드 액센트".to_string(),
                surface_bg: "white with ample spacing".to_string(),
                border: "gray-100 for subtle elegance".to_string(),
                text_strong: "gray-900 for clarity".to_string(),
                text_weak: "gray-600 for details".to_string(),
            },
            accessibility_notes: strings(&[
                "충분한 대비로 가독성 확보",
                "가격 정보는 명확하게",
                "예약 버튼은 충분한 크기와 대비",
            ]),
        },

        typography: Typography {
            font_family: FontFamily {
                primary: "Pretendard".to_string(),
                fallback: "system-ui".to_string(),
                alt_suggestion: "Playfair Display (고급스러운 세리프) + Inter (본문)".to_string(),
            },
            scale: TypeScale {
                h1: TypographyScale::new("64px", 600, "1.1", "-0.02em"),
                h2: TypographyScale::new("48px", 600, "1.2", "-0.01em"),
                h3: TypographyScale::new("32px", 500, "1.3", "0"),
                body: TypographyScale::new("17px", 400, "1.8", "0.01em"),
                caption: TypographyScale::new("15px", 400, "1.6", "0.02em"),
            },
        },

        components: Components {
            button: ButtonSet {
                primary: PrimaryButton {
                    height_px: 56,
                    padding: "px-12 py-4".to_string(),
                    radius: "rounded-lg".to_string(),
                    bg: "bg-primary-700".to_string(),
                    text: "text-white font-medium text-lg tracking-wide".to_string(),
                    hover: "hover:bg-primary-800 hover:shadow-lg transition-all duration-300".to_string(),
                    disabled: "disabled:bg-gray-300".to_string(),
                    tailwind: "bg-primary-700 text-white font-medium text-lg tracking-wide px-12 py-4 rounded-lg hover:bg-primary-800 hover:shadow-lg transition-all duration-300".to_string(),
                },
                secondary: SecondaryButton {
                    height_px: 56,
                    padding: "px-12 py-4".to_string(),
                    radius: "rounded-lg".to_string(),
                    border: "border-2 border-primary-700".to_string(),
                    bg: None,
                    text: "text-primary-700 font-medium text-lg tracking-wide".to_string(),
                    hover: "hover:bg-primary-50 transition-colors duration-300".to_string(),
                    disabled: "disabled:border-gray-300 disabled:text-gray-300".to_string(),
                    tailwind: "border-2 border-primary-700 text-primary-700 font-medium text-lg tracking-wide px-12 py-4 rounded-lg hover:bg-primary-50".to_string(),
                },
            },
            input: Input {
                height_px: 52,
                radius: "rounded-lg".to_string(),
                border: "border border-gray-300".to_string(),
                placeholder: "placeholder:text-gray-400".to_string(),
                focus_ring: "focus:ring-2 focus:ring-primary-500 focus:border-primary-500".to_string(),
                tailwind: "w-full h-13 px-5 text-base border border-gray-300 rounded-lg focus:ring-2 focus:ring-primary-500".to_string(),
            },
            card: Card {
                radius: "rounded-xl".to_string(),
                padding: "p-0".to_string(),
                shadow: "shadow-lg hover:shadow-2xl transition-all duration-500".to_string(),
                border: "border-0".to_string(),
                tailwind: "bg-white rounded-xl overflow-hidden shadow-lg hover:shadow-2xl transition-all duration-500".to_string(),
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
                container: "max-w-[1920px] mx-auto px-8 lg:px-16".to_string(),
                header: "bg-white border-b border-gray-100 sticky top-0 z-50 h-20 flex items-center justify-between px-8 lg:px-16".to_string(),
                hero: "relative h-screen bg-cover bg-center flex items-end justify-center pb-20".to_string(),
                primary_button: "bg-primary-700 text-white font-medium text-lg tracking-wide px-12 py-4 rounded-lg hover:bg-primary-800 hover:shadow-lg transition-all duration-300".to_string(),
                secondary_button: "border-2 border-primary-700 text-primary-700 font-medium text-lg tracking-wide px-12 py-4 rounded-lg hover:bg-primary-50".to_string(),
                card: "bg-white rounded-xl overflow-hidden shadow-lg hover:shadow-2xl transition-all duration-500".to_string(),
                input: "w-full h-13 px-5 text-base border border-gray-300 rounded-lg focus:ring-2 focus:ring-primary-500".to_string(),
                thumbnail: None,
                poster: None,
            },
            implementation_notes: strings(&[
                "고해상도 호텔 사진 필수 (WebP 포맷)",
                "예약 시스템은 date-picker로 UX 향상",
                "360도 룸 투어는 별도 모듈",
                "다국어 지원 필수 (i18n)",
            ]),
        },

        variation_summary: VariationSummary {
            changed_points: vec![
                VariationPoint::new(
                    "Colors",
                    "프리미엄 틸 + 골드 액센트",
                    "호텔 업계는 고급스러움과 신뢰를 주는 색상. 골드는 프리미엄 서비스 강조",
                ),
                VariationPoint::new(
                    "Spacing",
                    "넓은 여백 (32px gutter, py-32)",
                    "럭셔리 브랜드는 여유로운 공간으로 품격 표현",
                ),
                VariationPoint::new(
                    "Typography",
                    "큰 사이즈 + 넓은 letter-spacing",
                    "고급스러운 타이포그래피. 가독성과 우아함",
                ),
                VariationPoint::new(
                    "Components",
                    "부드러운 애니메이션 (duration-500)",
                    "서두르지 않는 우아한 인터랙션",
                ),
            ],
            unchanged_principles: strings(&[
                "반응형 grid 시스템",
                "접근성 기준 준수",
                "Mobile-first 접근",
                "일관된 spacing",
            ]),
        },
    }
}
