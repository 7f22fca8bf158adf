// Built-in IAB v1 content taxonomy.
//
// Sub-category codes are positional: the Nth name in a category's list gets
// the code `<category>-<N>`, matching the published IAB numbering.

pub(super) struct CategoryDef {
    pub code: &'static str,
    pub name: &'static str,
    pub subcategories: &'static [&'static str],
    pub keywords: &'static [&'static str],
}

pub(super) const CATEGORIES: &[CategoryDef] = &[
    CategoryDef {
        code: "IAB1",
        name: "Arts & Entertainment",
        subcategories: &[
            "Books & Literature", "Celebrity Fan/Gossip", "Fine Art", "Humor", "Movies", "Music",
            "Television",
        ],
        keywords: &[
            "entertainment", "art", "movie", "film", "music", "concert", "book", "novel",
            "celebrity", "actor", "actress", "director", "tv", "television", "show", "theater",
            "comedy", "drama",
        ],
    },
    CategoryDef {
        code: "IAB2",
        name: "Automotive",
        subcategories: &[
            "Auto Parts", "Auto Repair", "Buying/Selling Cars", "Car Culture",
            "Certified Pre-Owned", "Convertible", "Coupe", "Crossover", "Diesel",
            "Electric Vehicle", "Hatchback", "Hybrid", "Luxury", "MiniVan", "Motorcycles",
            "Off-Road Vehicles", "Performance Vehicles", "Pickup", "Road-Side Assistance",
            "Sedan", "Trucks & Accessories", "Vintage Cars", "Wagon",
        ],
        keywords: &[
            "car", "vehicle", "automotive", "auto", "truck", "suv", "repair", "parts", "dealer",
            "driving",
        ],
    },
    CategoryDef {
        code: "IAB3",
        name: "Business",
        subcategories: &[
            "Advertising", "Agriculture", "Biotech/Biomedical", "Business Software",
            "Construction", "Forestry", "Government", "Green Solutions", "Human Resources",
            "Logistics", "Marketing", "Metals",
        ],
        keywords: &[
            "business", "company", "corporate", "industry", "market", "finance", "investment",
            "economy", "trade", "stock", "management",
        ],
    },
    CategoryDef {
        code: "IAB4",
        name: "Careers",
        subcategories: &[
            "Career Planning", "College", "Financial Aid", "Job Fairs", "Job Search",
            "Resume Writing/Advice", "Nursing", "Scholarships", "Telecommuting", "U.S. Military",
            "Career Advice",
        ],
        keywords: &[
            "job", "career", "employment", "hiring", "resume", "interview", "salary",
            "profession", "work",
        ],
    },
    CategoryDef {
        code: "IAB5",
        name: "Education",
        subcategories: &[
            "7-12 Education", "Adult Education", "Art History", "College Administration",
            "College Life", "Distance Learning", "English as a 2nd Language", "Language Learning",
            "Graduate School", "Homeschooling", "Homework/Study Tips", "K-6 Educators",
            "Private School", "Special Education", "Studying Business",
        ],
        keywords: &[
            "education", "school", "university", "college", "degree", "academic", "learning",
            "student", "teacher", "professor", "course", "class",
        ],
    },
    CategoryDef {
        code: "IAB6",
        name: "Family & Parenting",
        subcategories: &[
            "Adoption", "Babies & Toddlers", "Daycare/Pre School", "Family Internet",
            "Parenting - K-6 Kids", "Parenting teens", "Pregnancy", "Special Needs Kids",
            "Eldercare",
        ],
        keywords: &[
            "family", "parent", "child", "baby", "kid", "mother", "father", "pregnancy",
            "toddler", "parenting",
        ],
    },
    CategoryDef {
        code: "IAB7",
        name: "Health & Fitness",
        subcategories: &[
            "Exercise", "A.D.D.", "AIDS/HIV", "Allergies", "Alternative Medicine", "Arthritis",
            "Asthma", "Autism/PDD", "Bipolar Disorder", "Brain Tumor", "Cancer", "Cholesterol",
            "Chronic Fatigue Syndrome", "Chronic Pain", "Cold & Flu", "Deafness", "Dental Care",
            "Depression", "Dermatology", "Diabetes", "Epilepsy", "GERD/Acid Reflux",
            "Headaches/Migraines", "Heart Disease", "Herbs for Health", "Holistic Healing",
            "IBS/Crohn's Disease", "Incest/Abuse Support", "Incontinence", "Infertility",
            "Men's Health", "Nutrition", "Orthopedics", "Panic/Anxiety Disorders", "Pediatrics",
            "Physical Therapy", "Psychology/Psychiatry", "Senior Health", "Sexuality",
            "Sleep Disorders", "Smoking Cessation", "Substance Abuse", "Thyroid Disease",
            "Weight Loss", "Women's Health",
        ],
        keywords: &[
            "health", "fitness", "exercise", "workout", "diet", "nutrition", "medical", "disease",
            "doctor", "hospital", "medicine", "wellness",
        ],
    },
    CategoryDef {
        code: "IAB8",
        name: "Food & Drink",
        subcategories: &[
            "American Cuisine", "Barbecues & Grilling", "Cajun/Creole", "Chinese Cuisine",
            "Cocktails/Beer", "Coffee/Tea", "Cuisine-Specific", "Desserts & Baking", "Dining Out",
            "Food Allergies", "French Cuisine", "Health/Low-Fat Cooking", "Italian Cuisine",
            "Japanese Cuisine", "Mexican Cuisine", "Vegan", "Vegetarian", "Wine",
        ],
        keywords: &[
            "food", "drink", "recipe", "cooking", "cuisine", "restaurant", "chef", "meal",
            "dinner", "lunch", "breakfast", "baking", "grill",
        ],
    },
    CategoryDef {
        code: "IAB9",
        name: "Hobbies & Interests",
        subcategories: &[
            "Art/Technology", "Arts & Crafts", "Beadwork", "Bird-Watching", "Board Games/Puzzles",
            "Candle & Soap Making", "Card Games", "Chess", "Cigars", "Collecting", "Comic Books",
            "Drawing/Sketching", "Freelance Writing", "Genealogy", "Getting Published", "Guitar",
            "Home Recording", "Investors & Patents", "Jewelry Making", "Magic & Illusion",
            "Needlework", "Painting", "Photography", "Radio", "Roleplaying Games",
            "Sci-Fi & Fantasy", "Scrapbooking", "Screenwriting", "Stamps & Coins",
            "Video & Computer Games", "Woodworking",
        ],
        keywords: &[
            "hobby", "craft", "collection", "diy", "gardening", "photography", "sewing",
            "knitting", "woodworking", "interest",
        ],
    },
    CategoryDef {
        code: "IAB10",
        name: "Home & Garden",
        subcategories: &[
            "Appliances", "Entertaining", "Environmental Safety", "Gardening", "Home Repair",
            "Home Theater", "Interior Decorating", "Landscaping", "Remodeling & Construction",
        ],
        keywords: &[
            "home", "house", "garden", "furniture", "decor", "interior", "design", "decoration",
            "gardening", "landscaping", "lawn", "appliance",
        ],
    },
    CategoryDef {
        code: "IAB11",
        name: "Law, Gov't & Politics",
        subcategories: &["Immigration", "Legal Issues", "Government", "Politics", "Commentary"],
        keywords: &[
            "law", "legal", "government", "politics", "policy", "election", "vote", "political",
            "president", "congress", "court", "legislation",
        ],
    },
    CategoryDef {
        code: "IAB12",
        name: "News",
        subcategories: &["International News", "National News", "Local News"],
        keywords: &[
            "news", "headline", "report", "journalist", "media", "press", "breaking",
            "current events", "update",
        ],
    },
    CategoryDef {
        code: "IAB13",
        name: "Personal Finance",
        subcategories: &[
            "Beginning Investing", "Credit/Debt & Loans", "Financial News", "Financial Planning",
            "Hedge Fund", "Insurance", "Investing", "Mutual Funds", "Options",
            "Retirement Planning", "Stocks", "Tax Planning",
        ],
        keywords: &[
            "finance", "money", "invest", "loan", "credit", "debt", "mortgage", "banking",
            "budget", "saving", "retirement",
        ],
    },
    CategoryDef {
        code: "IAB14",
        name: "Society",
        subcategories: &[
            "Dating", "Divorce Support", "Gay Life", "Marriage", "Senior Living", "Teens",
            "Weddings", "Ethnic Specific",
        ],
        keywords: &[
            "society", "culture", "community", "relationship", "dating", "wedding", "marriage",
            "divorce", "social",
        ],
    },
    CategoryDef {
        code: "IAB15",
        name: "Science",
        subcategories: &[
            "Astrology", "Biology", "Chemistry", "Geology", "Paranormal Phenomena", "Physics",
            "Space/Astronomy", "Geography", "Botany", "Weather",
        ],
        keywords: &[
            "science", "research", "scientific", "biology", "chemistry", "physics", "astronomy",
            "technology", "experiment", "discovery",
        ],
    },
    CategoryDef {
        code: "IAB16",
        name: "Pets",
        subcategories: &[
            "Aquariums", "Birds", "Cats", "Dogs", "Large Animals", "Reptiles",
            "Veterinary Medicine",
        ],
        keywords: &[
            "pet", "dog", "cat", "animal", "veterinarian", "breed", "fish", "bird", "reptile",
            "hamster",
        ],
    },
    CategoryDef {
        code: "IAB17",
        name: "Sports",
        subcategories: &[
            "Auto Racing", "Baseball", "Bicycling", "Bodybuilding", "Boxing",
            "Canoeing/Kayaking", "Cheerleading", "Climbing", "Cricket", "Figure Skating",
            "Fly Fishing", "Football", "Freshwater Fishing", "Game & Fish", "Golf",
            "Horse Racing", "Horses", "Hunting/Shooting", "Inline Skating", "Martial Arts",
            "Mountain Biking", "NASCAR Racing", "Olympics", "Paintball", "Power & Motorcycles",
            "Pro Basketball", "Pro Ice Hockey", "Rodeo", "Rugby", "Running/Jogging", "Sailing",
            "Saltwater Fishing", "Scuba Diving", "Skateboarding", "Skiing", "Snowboarding",
            "Surfing/Bodyboarding", "Swimming", "Table Tennis/Ping-Pong", "Tennis", "Volleyball",
            "Walking", "Waterski/Wakeboard", "World Soccer",
        ],
        keywords: &[
            "sport", "game", "team", "player", "athlete", "championship", "tournament", "match",
            "competition", "league", "score", "win", "coach", "stadium", "cricket", "baseball",
            "football", "soccer", "basketball", "tennis", "golf", "hockey", "rugby", "boxing",
            "racing", "swimming", "cycling", "olympics", "fitness", "workout", "exercise", "run",
            "race", "ball", "bat", "wicket", "bowl", "pitch", "field", "court", "track",
        ],
    },
    CategoryDef {
        code: "IAB18",
        name: "Style & Fashion",
        subcategories: &["Beauty", "Body Art", "Fashion", "Jewelry", "Clothing", "Accessories"],
        keywords: &[
            "fashion", "style", "clothing", "dress", "beauty", "accessory", "jewelry", "cosmetic",
            "makeup", "hair", "model", "designer",
        ],
    },
    CategoryDef {
        code: "IAB19",
        name: "Technology & Computing",
        subcategories: &[
            "3-D Graphics", "Animation", "Antivirus Software", "C/C++", "Cameras & Camcorders",
            "Cell Phones", "Computer Certification", "Computer Networking",
            "Computer Peripherals", "Computer Reviews", "Data Centers", "Databases",
            "Desktop Publishing", "Desktop Video", "Email", "Graphics Software",
            "Home Video/DVD", "Internet Technology", "Java", "JavaScript", "Mac Support",
            "MP3/MIDI", "Net Conferencing", "Net for Beginners", "Network Security",
            "Palmtops/PDAs", "PC Support", "Portable", "Entertainment", "Shareware/Freeware",
            "Unix", "Visual Basic", "Web Clip Art", "Web Design/HTML", "Web Search", "Windows",
        ],
        keywords: &[
            "technology", "computer", "software", "hardware", "internet", "digital", "app",
            "programming", "code", "device", "gadget", "electronics", "mobile", "phone", "laptop",
            "tablet",
        ],
    },
    CategoryDef {
        code: "IAB20",
        name: "Travel",
        subcategories: &[
            "Adventure Travel", "Africa", "Air Travel", "Australia & New Zealand",
            "Bed & Breakfasts", "Budget Travel", "Business Travel", "By US Locale", "Camping",
            "Canada", "Caribbean", "Cruises", "Eastern Europe", "Europe", "France", "Greece",
            "Honeymoons/Getaways", "Hotels", "Italy", "Japan", "Mexico & Central America",
            "National Parks", "South America", "Spas", "Theme Parks", "Traveling with Kids",
            "United Kingdom",
        ],
        keywords: &[
            "travel", "vacation", "tourism", "tourist", "destination", "hotel", "resort", "flight",
            "airline", "cruise", "beach", "mountain", "trip", "journey", "tour",
        ],
    },
    CategoryDef {
        code: "IAB21",
        name: "Real Estate",
        subcategories: &["Apartments", "Architects", "Buying/Selling Homes"],
        keywords: &[
            "real estate", "property", "home", "house", "apartment", "condo", "rent", "buy",
            "sell", "mortgage", "realtor", "broker", "listing",
        ],
    },
    CategoryDef {
        code: "IAB22",
        name: "Shopping",
        subcategories: &["Contests & Freebies", "Couponing", "Comparison", "Engines"],
        keywords: &[
            "shopping", "store", "retail", "mall", "shop", "buy", "purchase", "product", "price",
            "discount", "sale", "deal", "coupon",
        ],
    },
    CategoryDef {
        code: "IAB23",
        name: "Religion & Spirituality",
        subcategories: &[
            "Alternative Religions", "Atheism/Agnosticism", "Buddhism", "Catholicism",
            "Christianity", "Hinduism", "Islam", "Judaism", "Latter-Day Saints", "Pagan/Wiccan",
        ],
        keywords: &[
            "religion", "spiritual", "faith", "god", "church", "prayer", "worship", "belief",
            "religious", "christian", "muslim", "islam", "hindu", "buddhist", "jewish",
        ],
    },
];
