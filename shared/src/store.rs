//! Bundled article content.
//!
//! Articles are authored in source and never mutated at runtime. Category
//! membership is decided by which group an article is declared in.

use once_cell::sync::Lazy;

use crate::{Article, Category};

static STORE: Lazy<ArticleStore> = Lazy::new(ArticleStore::bundled);

/// In-memory article collections grouped by category.
#[derive(Debug, Clone)]
pub struct ArticleStore {
    groups: Vec<(Category, Vec<Article>)>,
}

impl ArticleStore {
    /// The store compiled into the binary.
    pub fn global() -> &'static ArticleStore {
        &STORE
    }

    /// Builds a store from explicit groups. Groups keep the given order.
    pub fn from_groups(groups: Vec<(Category, Vec<Article>)>) -> Self {
        Self {
            groups,
        }
    }

    fn bundled() -> Self {
        let groups = Category::ALL
            .into_iter()
            .map(|category| {
                let articles = seeds_for(category).iter().map(ArticleSeed::to_article).collect();
                (category, articles)
            })
            .collect();
        Self::from_groups(groups)
    }

    /// Articles declared in `category`, in source order.
    pub fn group(&self, category: Category) -> &[Article] {
        self.groups
            .iter()
            .find(|(group, _)| *group == category)
            .map(|(_, articles)| articles.as_slice())
            .unwrap_or(&[])
    }

    /// Articles for a raw category key. Unknown keys yield an empty slice.
    pub fn articles_by_category(&self, key: &str) -> &[Article] {
        match Category::parse(key) {
            Some(category) => self.group(category),
            None => &[],
        }
    }

    /// Every article, group after group.
    pub fn all_articles(&self) -> Vec<Article> {
        self.groups
            .iter()
            .flat_map(|(_, articles)| articles.iter().cloned())
            .collect()
    }

    /// Iterates `(category, article)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &Article)> {
        self.groups
            .iter()
            .flat_map(|(category, articles)| articles.iter().map(move |article| (*category, article)))
    }

    /// Looks an article up by id across all groups.
    pub fn find_article(&self, id: &str) -> Option<(Category, &Article)> {
        self.iter().find(|(_, article)| article.id == id)
    }

    /// Number of articles per category, in navigation order.
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        self.groups
            .iter()
            .map(|(category, articles)| (*category, articles.len()))
            .collect()
    }

    /// Total number of bundled articles.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|(_, articles)| articles.len()).sum()
    }

    /// Whether the store holds no article at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Articles declared in the group named by `key`.
pub fn get_articles_by_category(key: &str) -> &'static [Article] {
    ArticleStore::global().articles_by_category(key)
}

/// Every bundled article.
pub fn get_all_articles() -> Vec<Article> {
    ArticleStore::global().all_articles()
}

struct ArticleSeed {
    id: &'static str,
    title: &'static str,
    excerpt: &'static str,
    content: &'static str,
    image: &'static str,
    author: &'static str,
    date: &'static str,
    read_time: u32,
    tags: &'static [&'static str],
    featured: bool,
}

impl ArticleSeed {
    fn to_article(&self) -> Article {
        Article {
            id: self.id.to_string(),
            title: self.title.to_string(),
            excerpt: self.excerpt.to_string(),
            content: self.content.to_string(),
            image: self.image.to_string(),
            author: self.author.to_string(),
            date: self.date.to_string(),
            read_time: self.read_time,
            tags: self.tags.iter().map(|tag| tag.to_string()).collect(),
            featured: self.featured,
        }
    }
}

fn seeds_for(category: Category) -> &'static [ArticleSeed] {
    match category {
        Category::Fashion => FASHION,
        Category::Beauty => BEAUTY,
        Category::Lifestyle => LIFESTYLE,
        Category::Celebrity => CELEBRITY,
        Category::Culture => CULTURE,
        Category::Wellness => WELLNESS,
    }
}

const FASHION: &[ArticleSeed] = &[
    ArticleSeed {
        id: "fashion-1",
        title: "The Algorithm Aesthetic: How AI Predicts Your Next Fashion Obsession",
        excerpt: "Artificial intelligence has quietly revolutionized fashion forecasting, creating a new aesthetic language that bridges data science and creative intuition.",
        content: "Artificial intelligence has quietly revolutionized fashion forecasting, creating a new aesthetic language that bridges data science and creative intuition. Major fashion houses now employ AI systems that analyze everything from street style photography to social media sentiment, color psychology research to weather pattern predictions.\n\nThese algorithms don't just predict trends - they're creating them. By identifying micro-patterns in consumer behavior before they become visible to human observers, AI systems are influencing design decisions months before collections reach runways.\n\nThe result is what industry insiders call 'predictive fashion' - clothing designed not just for current tastes, but for desires consumers don't yet know they have. This technological evolution is reshaping how we think about creativity, originality, and the very nature of fashion inspiration.",
        image: "https://images.unsplash.com/photo-1485827404703-89b55fcc595e?w=800&h=600&fit=crop",
        author: "Dr. Priya Sharma",
        date: "2024-08-25",
        read_time: 6,
        tags: &["ai-fashion", "predictive-trends", "technology"],
        featured: true,
    },
    ArticleSeed {
        id: "fashion-2",
        title: "Micro-Trend Mania: The 7-Day Fashion Cycles Breaking the Internet",
        excerpt: "Fashion's trend cycles have accelerated to an almost incomprehensible pace. What once took seasons to develop now emerges, peaks, and disappears within a single week.",
        content: "Fashion's trend cycles have accelerated to an almost incomprehensible pace. What once took seasons to develop now emerges, peaks, and disappears within a single week. This phenomenon, driven by social media algorithms and global connectivity, is creating unprecedented challenges for both brands and consumers.\n\nThe speed of these micro-trends means that by the time a fashion item gains viral attention, it's already approaching obsolescence. Consumers find themselves in a constant state of FOMO, while brands struggle to keep pace with demand that can spike and crash within days.\n\nThis acceleration is forcing a fundamental reconsideration of fashion consumption, with many young consumers now choosing to engage with trends virtually - through social media interaction and mood boarding - rather than through actual purchases.",
        image: "https://images.unsplash.com/photo-1441986300917-64674bd600d8?w=800&h=600&fit=crop",
        author: "Arjun Mehta",
        date: "2024-08-22",
        read_time: 5,
        tags: &["micro-trends", "social-media", "fast-fashion"],
        featured: false,
    },
    ArticleSeed {
        id: "fashion-3",
        title: "The Rental Revolution: Why Ownership Is Fashion's Biggest Faux Pas",
        excerpt: "The concept of fashion ownership is undergoing radical transformation as rental services, clothing swaps, and sharing economies reshape how we think about personal style.",
        content: "The concept of fashion ownership is undergoing radical transformation as rental services, clothing swaps, and sharing economies reshape how we think about personal style. For many young consumers, particularly in urban areas, accessing fashion is more important than owning it.\n\nThis shift represents more than economic pragmatism - it's a philosophical change toward experience-based consumption. Fashion is increasingly viewed as a service rather than a product, with consumers valuing variety, novelty, and sustainability over possession.\n\nThe rental revolution is also democratizing access to luxury fashion, allowing individuals to experiment with high-end pieces previously beyond their reach, and encouraging more adventurous, temporary style choices.",
        image: "https://images.unsplash.com/photo-1469334031218-e382a71b716b?w=800&h=600&fit=crop",
        author: "Kavya Patel",
        date: "2024-08-20",
        read_time: 7,
        tags: &["rental-fashion", "sharing-economy", "sustainable"],
        featured: false,
    },
];

const BEAUTY: &[ArticleSeed] = &[
    ArticleSeed {
        id: "beauty-1",
        title: "The Great Foundation Exodus: Why Gen Z Abandoned Face Makeup Forever",
        excerpt: "The beauty industry is witnessing an unprecedented shift as younger consumers abandon traditional makeup routines in favor of skincare-focused regimens.",
        content: "The beauty industry is witnessing an unprecedented shift as younger consumers abandon traditional makeup routines in favor of skincare-focused regimens. This movement, often called 'skin minimalism,' represents a rejection of heavily made-up aesthetics in favor of enhanced natural beauty.\n\nThe trend is driven by multiple factors: increased awareness of skin health, desire for authenticity in social media representation, time constraints of modern lifestyles, and growing environmental consciousness about cosmetic waste.\n\nBeauty brands are responding by reformulating products to be more skin-beneficial, creating hybrid products that blur the line between skincare and makeup, and investing heavily in skin-perfecting technologies rather than coverage-focused formulations.",
        image: "https://images.unsplash.com/photo-1522335789203-aabd1fc54bc9?w=800&h=600&fit=crop",
        author: "Ananya Singh",
        date: "2024-08-26",
        read_time: 6,
        tags: &["gen-z", "skin-minimalism", "natural-beauty"],
        featured: true,
    },
    ArticleSeed {
        id: "beauty-2",
        title: "Biohacking Beauty: The Tech-Enhanced Skincare Routines of Mumbai's Elite",
        excerpt: "High-tech skincare has moved beyond spa treatments into daily routines, particularly among affluent urban consumers.",
        content: "High-tech skincare has moved beyond spa treatments into daily routines, particularly among affluent urban consumers. LED light therapy masks, microcurrent devices, and at-home radio-frequency treatments are becoming as common as serums and moisturizers.\n\nThis technological approach to beauty represents a convergence of Eastern wellness traditions with Western scientific innovation. Consumers are increasingly viewing skincare as a form of biohacking - using technology and data to optimize their skin's performance and appearance.\n\nThe trend is creating new categories of beauty professionals, from tech-skincare consultants to device training specialists, as the industry adapts to increasingly sophisticated consumer demands.",
        image: "https://images.unsplash.com/photo-1487412947147-5cebf100ffc2?w=800&h=600&fit=crop",
        author: "Dr. Rajesh Kumar",
        date: "2024-08-24",
        read_time: 7,
        tags: &["biohacking", "tech-skincare", "mumbai-elite"],
        featured: false,
    },
    ArticleSeed {
        id: "beauty-3",
        title: "The 60-Second Rule: Beauty Routines That Actually Work in Real Life",
        excerpt: "As life becomes increasingly fast-paced, beauty routines are being streamlined to accommodate time-poor consumers.",
        content: "As life becomes increasingly fast-paced, beauty routines are being streamlined to accommodate time-poor consumers. The '60-second rule' - creating maximum impact beauty routines that take one minute or less - has become a guiding principle for product development and consumer behavior.\n\nThis efficiency-focused approach has sparked innovation in multi-purpose products, application techniques, and routine optimization. Brands are creating products that deliver professional-level results in minimal time, while beauty influencers are teaching techniques that maximize impact per minute invested.\n\nThe movement represents a broader shift toward intentional beauty practices, where every step must justify its place in a routine through measurable results and time efficiency.",
        image: "https://images.unsplash.com/photo-1596462502278-27bfdc403348?w=800&h=600&fit=crop",
        author: "Meera Joshi",
        date: "2024-08-21",
        read_time: 5,
        tags: &["60-second-rule", "efficient-beauty", "time-saving"],
        featured: false,
    },
];

const LIFESTYLE: &[ArticleSeed] = &[
    ArticleSeed {
        id: "lifestyle-1",
        title: "The Work-From-Anywhere Wardrobe: 12 Pieces That Travel the World",
        excerpt: "Digital nomadism has created new demands for versatile, travel-friendly fashion that can transition seamlessly between video calls, co-working spaces, and weekend adventures.",
        content: "Digital nomadism has created new demands for versatile, travel-friendly fashion that can transition seamlessly between video calls, co-working spaces, and weekend adventures. The modern professional wardrobe is being redesigned around mobility, versatility, and comfort without sacrificing style.\n\nThis evolution has sparked innovation in fabric technology, garment construction, and styling techniques. Pieces must now serve multiple functions while taking up minimal luggage space and requiring little maintenance.\n\nThe work-from-anywhere wardrobe represents a broader shift toward intentional consumption, where each item must earn its place through proven versatility and consistent value across various contexts.",
        image: "https://images.unsplash.com/photo-1560472354-b33ff0c44a43?w=800&h=600&fit=crop",
        author: "Rohit Sharma",
        date: "2024-08-27",
        read_time: 8,
        tags: &["digital-nomad", "travel-wardrobe", "versatile-fashion"],
        featured: true,
    },
    ArticleSeed {
        id: "lifestyle-2",
        title: "Luxury Budget Living: The ₹50,000 Wardrobe That Looks Like ₹5 Lakhs",
        excerpt: "Strategic shopping has evolved into a sophisticated skill set that enables style-conscious consumers to create high-impact wardrobes on modest budgets.",
        content: "Strategic shopping has evolved into a sophisticated skill set that enables style-conscious consumers to create high-impact wardrobes on modest budgets. This approach combines investment pieces with smart budget finds, emphasizing cost-per-wear calculations over initial price points.\n\nThe key lies in understanding where to invest (classic pieces, quality basics) and where to save (trendy items, accessories), combined with excellent care and styling skills that maximize the perceived value of every piece.\n\nThis approach has democratized access to sophisticated style while promoting more sustainable consumption patterns that prioritize longevity over novelty.",
        image: "https://images.unsplash.com/photo-1551836022-deb4988cc6c0?w=800&h=600&fit=crop",
        author: "Priya Gupta",
        date: "2024-08-23",
        read_time: 7,
        tags: &["budget-fashion", "luxury-living", "smart-shopping"],
        featured: false,
    },
    ArticleSeed {
        id: "lifestyle-3",
        title: "The Sustainability Paradox: Why Buying More Clothes Became Eco-Friendly",
        excerpt: "Counter-intuitively, some fashion consumption models are proving more sustainable through increased purchasing of specific types of items.",
        content: "Counter-intuitively, some fashion consumption models are proving more sustainable through increased purchasing of specific types of items. The key lies in buying more versatile, durable pieces that reduce overall environmental impact through extended use and reduced waste.\n\nThis paradox highlights the importance of considering fashion's environmental impact holistically, accounting for production methods, material sourcing, transportation, use phase, and end-of-life disposal.\n\nThe approach requires sophisticated understanding of fashion's environmental footprint and represents a maturation in sustainable fashion thinking beyond simple 'buy less' messaging.",
        image: "https://images.unsplash.com/photo-1542601906990-b4d3fb778b09?w=800&h=600&fit=crop",
        author: "Vikram Malhotra",
        date: "2024-08-19",
        read_time: 6,
        tags: &["sustainability-paradox", "eco-friendly", "conscious-consumption"],
        featured: false,
    },
];

const CELEBRITY: &[ArticleSeed] = &[
    ArticleSeed {
        id: "celebrity-1",
        title: "The Celebrity Stylist Rebellion: Why A-Listers Are Firing Their Fashion Teams",
        excerpt: "A growing number of celebrities are taking control of their fashion narratives, moving away from professional styling teams toward personal curation.",
        content: "A growing number of celebrities are taking control of their fashion narratives, moving away from professional styling teams toward personal curation. This trend represents a desire for authentic self-expression and pushback against homogenized red carpet aesthetics.\n\nThe shift is creating more diverse, personal, and sometimes controversial celebrity fashion moments, as stars prioritize individual expression over industry-approved looks.\n\nThis movement is influencing fashion at all levels, encouraging consumers to develop their own style intuition rather than relying on external validation or professional guidance.",
        image: "https://images.unsplash.com/photo-1469334031218-e382a71b716b?w=800&h=600&fit=crop",
        author: "Neha Kapoor",
        date: "2024-08-28",
        read_time: 6,
        tags: &["celebrity-styling", "fashion-rebellion", "authentic-expression"],
        featured: true,
    },
    ArticleSeed {
        id: "celebrity-2",
        title: "Method Dressing's Evolution: From Costume to Character",
        excerpt: "Celebrity fashion has evolved beyond simple red carpet appearance management toward strategic personal branding through clothing choices.",
        content: "Celebrity fashion has evolved beyond simple red carpet appearance management toward strategic personal branding through clothing choices. Every outfit now serves multiple purposes: promoting current projects, establishing personal brand identity, and communicating values or messages.\n\nThis sophisticated approach to celebrity dressing is influencing how non-celebrities think about their own fashion choices, encouraging more intentional wardrobe curation that reflects personal values and goals.",
        image: "https://images.unsplash.com/photo-1506629905607-d405d7d3b8b4?w=800&h=600&fit=crop",
        author: "Arjun Malhotra",
        date: "2024-08-25",
        read_time: 5,
        tags: &["method-dressing", "personal-branding", "strategic-fashion"],
        featured: false,
    },
    ArticleSeed {
        id: "celebrity-3",
        title: "The Influence Economy Reality Check: When Celebrity Style Stops Selling",
        excerpt: "Data reveals a significant disconnect between celebrity fashion moments that generate media attention and those that actually drive consumer purchasing behavior.",
        content: "Data reveals a significant disconnect between celebrity fashion moments that generate media attention and those that actually drive consumer purchasing behavior. This gap is forcing brands to reconsider celebrity partnership strategies and consumers to question their own fashion inspiration sources.\n\nThe trend suggests a maturation in fashion consumption, where consumers are becoming more discriminating about which celebrity influences they allow into their purchasing decisions.",
        image: "https://images.unsplash.com/photo-1594736797933-d0401ba2fe65?w=800&h=600&fit=crop",
        author: "Sanya Verma",
        date: "2024-08-22",
        read_time: 7,
        tags: &["influence-economy", "celebrity-marketing", "consumer-behavior"],
        featured: false,
    },
];

const CULTURE: &[ArticleSeed] = &[
    ArticleSeed {
        id: "culture-1",
        title: "Digital Nomad Minimalism: The 15-Piece Wardrobe Taking Over Mumbai",
        excerpt: "The rise of location-independent work has created a new aesthetic philosophy that prizes versatility, quality, and mobility over variety and trendiness.",
        content: "The rise of location-independent work has created a new aesthetic philosophy that prizes versatility, quality, and mobility over variety and trendiness. This approach to fashion reflects broader changes in how people think about possession, identity, and lifestyle design.\n\nThe 15-piece wardrobe concept represents a radical departure from traditional fashion consumption, focusing on pieces that can be mixed, matched, and styled in multiple ways across different contexts and climates.\n\nThis movement is particularly strong in Mumbai's tech and creative communities, where professionals are embracing minimalist wardrobes that support their mobile lifestyles while maintaining professional and personal style standards.",
        image: "https://images.unsplash.com/photo-1513475382585-d06e58bcb0e0?w=800&h=600&fit=crop",
        author: "Ravi Krishnan",
        date: "2024-08-29",
        read_time: 7,
        tags: &["digital-nomad", "minimalism", "mumbai-fashion"],
        featured: true,
    },
    ArticleSeed {
        id: "culture-2",
        title: "The TikTok Trend Acceleration Crisis: Fashion at the Speed of Algorithms",
        excerpt: "Social media algorithms are creating fashion trend cycles so rapid that they're becoming unsustainable for both consumers and brands.",
        content: "Social media algorithms are creating fashion trend cycles so rapid that they're becoming unsustainable for both consumers and brands. This acceleration is forcing a fundamental reconsideration of how fashion trends develop, spread, and die.\n\nThe phenomenon is creating what researchers call 'trend fatigue' - a condition where consumers become overwhelmed by the constant pressure to stay current with rapidly changing fashion moments.\n\nThis crisis is pushing both brands and consumers toward more sustainable approaches to trend engagement, including 'slow fashion' movements and algorithm-resistant personal style development.",
        image: "https://images.unsplash.com/photo-1441986300917-64674bd600d8?w=800&h=600&fit=crop",
        author: "Isha Agarwal",
        date: "2024-08-26",
        read_time: 6,
        tags: &["tiktok-trends", "algorithm-fashion", "trend-acceleration"],
        featured: false,
    },
    ArticleSeed {
        id: "culture-3",
        title: "Climate Anxiety Dressing: How Environmental Concerns Reshape Style Choices",
        excerpt: "Growing environmental awareness is influencing fashion choices in complex ways, from color preferences reflecting climate moods to practical adaptations.",
        content: "Growing environmental awareness is influencing fashion choices in complex ways, from color preferences reflecting climate moods to practical adaptations for changing weather patterns and sustainability concerns driving purchasing decisions.\n\nClimate anxiety is manifesting in fashion through increased preference for earth tones, weather-adaptive clothing, and investment in durable pieces that can withstand environmental uncertainty.\n\nThis psychological response to environmental concerns is creating new fashion categories and influencing design decisions across the industry, from material selection to seasonal planning.",
        image: "https://images.unsplash.com/photo-1542601906990-b4d3fb778b09?w=800&h=600&fit=crop",
        author: "Deepika Nair",
        date: "2024-08-23",
        read_time: 8,
        tags: &["climate-anxiety", "environmental-fashion", "sustainable-style"],
        featured: false,
    },
];

const WELLNESS: &[ArticleSeed] = &[
    ArticleSeed {
        id: "wellness-1",
        title: "Dopamine Dressing Science: How Color Psychology Became Mental Health Treatment",
        excerpt: "Research confirms that clothing color choices can measurably impact mood, confidence, and psychological well-being.",
        content: "Research confirms that clothing color choices can measurably impact mood, confidence, and psychological well-being. This scientific understanding is transforming how people approach daily dressing decisions, with many now consciously using fashion as a tool for emotional regulation.\n\nStudies show that specific colors can trigger neurochemical responses, influencing everything from stress levels to social confidence. This has led to the development of 'therapeutic dressing' practices used by mental health professionals.\n\nThe approach is particularly popular among young professionals who use strategic color choices to manage work stress, social anxiety, and mood fluctuations throughout their daily routines.",
        image: "https://images.unsplash.com/photo-1540569014015-19a7be504e3a?w=800&h=600&fit=crop",
        author: "Dr. Kavitha Reddy",
        date: "2024-08-30",
        read_time: 7,
        tags: &["dopamine-dressing", "color-psychology", "mental-health"],
        featured: true,
    },
    ArticleSeed {
        id: "wellness-2",
        title: "Mindful Beauty Rituals: The 5-Minute Practices Reducing Urban Anxiety",
        excerpt: "Beauty routines are being reimagined as mindfulness practices, with focus shifting from appearance outcomes to present-moment awareness and self-care.",
        content: "Beauty routines are being reimagined as mindfulness practices, with focus shifting from appearance outcomes to present-moment awareness and self-care. These practices offer accessible stress reduction tools for busy urban lifestyles.\n\nThe approach combines traditional beauty steps with meditation techniques, breathing exercises, and intentional self-care moments that can be completed in just five minutes.\n\nUrban professionals are finding these micro-wellness practices particularly effective for managing daily stress and creating moments of calm within hectic schedules.",
        image: "https://images.unsplash.com/photo-1506126613408-eca07ce68e71?w=800&h=600&fit=crop",
        author: "Anjali Sharma",
        date: "2024-08-27",
        read_time: 6,
        tags: &["mindful-beauty", "urban-anxiety", "wellness-rituals"],
        featured: false,
    },
    ArticleSeed {
        id: "wellness-3",
        title: "Sustainable Self-Care: Zero-Waste Beauty as Spiritual Practice",
        excerpt: "Environmental consciousness in beauty routines is evolving beyond practical concerns toward spiritual and ethical dimensions.",
        content: "Environmental consciousness in beauty routines is evolving beyond practical concerns toward spiritual and ethical dimensions, with many consumers finding deeper meaning and satisfaction in sustainable beauty practices.\n\nThis approach treats beauty routines as acts of environmental stewardship, connecting personal care with planetary care in ways that enhance both physical and spiritual well-being.\n\nPractitioners report that zero-waste beauty routines create a sense of purpose and connection that traditional beauty practices often lack, leading to greater overall life satisfaction.",
        image: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=800&h=600&fit=crop",
        author: "Maya Patel",
        date: "2024-08-24",
        read_time: 8,
        tags: &["sustainable-self-care", "zero-waste-beauty", "spiritual-practice"],
        featured: false,
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{get_all_articles, get_articles_by_category, ArticleStore};
    use crate::Category;

    #[test]
    fn beauty_group_has_three_articles_in_source_order() {
        let beauty = get_articles_by_category("beauty");
        let ids: Vec<&str> = beauty.iter().map(|article| article.id.as_str()).collect();
        assert_eq!(ids, vec!["beauty-1", "beauty-2", "beauty-3"]);
        for article in beauty {
            assert!(!article.id.is_empty());
            assert!(!article.title.is_empty());
            assert!(!article.author.is_empty());
            assert!(!article.tags.is_empty());
        }
    }

    #[test]
    fn lookup_is_case_insensitive_and_unknown_is_empty() {
        let store = ArticleStore::global();
        assert_eq!(store.articles_by_category("FASHION").len(), 3);
        assert_eq!(store.articles_by_category(" Culture ").len(), 3);
        assert!(store.articles_by_category("luxury").is_empty());
        assert!(store.articles_by_category("").is_empty());
    }

    #[test]
    fn all_articles_concatenates_groups_in_order() {
        let all = get_all_articles();
        assert_eq!(all.len(), 18);
        assert_eq!(all.first().map(|a| a.id.as_str()), Some("fashion-1"));
        assert_eq!(all.last().map(|a| a.id.as_str()), Some("wellness-3"));

        let expected: Vec<String> = Category::ALL
            .into_iter()
            .flat_map(|category| ArticleStore::global().group(category).to_vec())
            .map(|article| article.id)
            .collect();
        let actual: Vec<String> = all.into_iter().map(|article| article.id).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn ids_are_unique_and_prefixed_with_their_group() {
        let store = ArticleStore::global();
        let mut seen = HashSet::new();
        for (category, article) in store.iter() {
            assert!(seen.insert(article.id.clone()), "duplicate id {}", article.id);
            assert!(article.id.starts_with(&format!("{}-", category.slug())), "{}", article.id);
        }
    }

    #[test]
    fn first_article_of_each_group_is_the_only_featured_one() {
        let store = ArticleStore::global();
        for category in Category::ALL {
            let flags: Vec<bool> = store.group(category).iter().map(|a| a.featured).collect();
            assert_eq!(flags, vec![true, false, false], "{category}");
        }
    }

    #[test]
    fn find_article_reports_its_category() {
        let store = ArticleStore::global();
        let (category, article) = store.find_article("celebrity-2").expect("article exists");
        assert_eq!(category, Category::Celebrity);
        assert_eq!(article.author, "Arjun Malhotra");
        assert!(store.find_article("celebrity-9").is_none());
        assert_eq!(store.category_counts().len(), 6);
        assert_eq!(store.len(), 18);
    }
}
