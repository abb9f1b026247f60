//! Stage walkthroughs for deployment, request handling and framework topics

use crate::frames::{Stage, StageFlow};

pub static DEPLOYMENT_PIPELINE: StageFlow = StageFlow {
    title: "AWS Deployment Pipeline with GitHub Actions",
    stages: &[
        Stage {
            id: "githubActions",
            name: "GitHub Actions",
            description: "Trigger CI/CD pipeline",
            commands: &["git push origin main"],
            snippet: None,
        },
        Stage {
            id: "test",
            name: "Run Tests",
            description: "Running unit and integration tests",
            commands: &["npm install", "npm test"],
            snippet: None,
        },
        Stage {
            id: "build",
            name: "Build & Install",
            description: "Building the application",
            commands: &["npm run build"],
            snippet: None,
        },
        Stage {
            id: "codeQuality",
            name: "Code Quality Check",
            description: "Performing static code analysis",
            commands: &["npm run lint", "npm run type-check"],
            snippet: None,
        },
        Stage {
            id: "dockerBuild",
            name: "Build Docker Image",
            description: "Creating Docker container image",
            commands: &["docker build -t myapp:latest ."],
            snippet: None,
        },
        Stage {
            id: "snykScan",
            name: "Snyk Security Scan",
            description: "Scanning for vulnerabilities",
            commands: &["snyk test"],
            snippet: None,
        },
        Stage {
            id: "codeCoverage",
            name: "Code Coverage",
            description: "Generating code coverage report",
            commands: &["npm run coverage"],
            snippet: None,
        },
        Stage {
            id: "pushToECR",
            name: "Push to ECR",
            description: "Pushing Docker image to Amazon ECR",
            commands: &[
                "aws ecr get-login-password | docker login --username AWS --password-stdin $ECR_REGISTRY",
                "docker tag myapp:latest $ECR_REGISTRY/myapp:latest",
                "docker push $ECR_REGISTRY/myapp:latest",
            ],
            snippet: None,
        },
        Stage {
            id: "deployToEKS",
            name: "Deploy to EKS",
            description: "Deploying to Amazon EKS",
            commands: &[
                "aws eks update-kubeconfig --name my-cluster",
                "kubectl apply -f k8s/deployment.yaml",
                "kubectl apply -f k8s/service.yaml",
            ],
            snippet: None,
        },
        Stage {
            id: "configureLoadBalancer",
            name: "Configure Load Balancer",
            description: "Setting up AWS Load Balancer",
            commands: &["kubectl apply -f k8s/ingress.yaml"],
            snippet: None,
        },
    ],
};

pub static MICROSERVICE_FLOW: StageFlow = StageFlow {
    title: "Microservice Application Flow",
    stages: &[
        Stage {
            id: "clientRequest",
            name: "Client Request",
            description: "Client sends a request via browser or mobile app.",
            commands: &[
                "User interacts with the UI and initiates a request.",
                "curl -X GET 'https://example-api.com/resource'",
                "Ensure proper authentication headers are included.",
            ],
            snippet: None,
        },
        Stage {
            id: "apiGateway",
            name: "API Gateway",
            description: "API Gateway receives and routes the request.",
            commands: &[
                "Route request to appropriate backend service.",
                "Validate request headers, tokens, and parameters.",
                "Throttle requests if necessary.",
            ],
            snippet: None,
        },
        Stage {
            id: "loadBalancer",
            name: "Load Balancer",
            description: "Distributes traffic to multiple service instances.",
            commands: &[
                "Distribute traffic across service nodes.",
                "Monitor instance health checks.",
                "Ensure sticky sessions if required for stateful services.",
            ],
            snippet: None,
        },
        Stage {
            id: "serviceLogic",
            name: "Service Logic",
            description: "Executes the business logic on the backend service.",
            commands: &[
                "Authenticate the request using JWT or OAuth tokens.",
                "Perform business logic: validate data, execute workflows.",
                "Interact with dependencies such as other microservices or APIs.",
            ],
            snippet: None,
        },
        Stage {
            id: "databaseInteraction",
            name: "Database Interaction",
            description: "Service interacts with the database to fetch/store data.",
            commands: &[
                "Run SQL query: SELECT * FROM table_name WHERE id = ?",
                "Ensure proper indexing to optimize query performance.",
                "Use transactions to ensure data consistency.",
            ],
            snippet: None,
        },
        Stage {
            id: "asyncProcessing",
            name: "Asynchronous Processing",
            description: "Publishes messages to SQS or EventBridge for async tasks.",
            commands: &[
                "Publish message to SQS with task payload.",
                "Trigger downstream services using EventBridge rules.",
                "Ensure message durability and retry policies.",
            ],
            snippet: None,
        },
        Stage {
            id: "backgroundWorker",
            name: "Background Worker",
            description: "Processes tasks from the queue or event bus.",
            commands: &[
                "Consume message from SQS or EventBridge.",
                "Process the task (e.g., send emails, resize images).",
                "Acknowledge message processing success or retry failures.",
            ],
            snippet: None,
        },
        Stage {
            id: "responseToClient",
            name: "Response to Client",
            description: "Sends the final response back to the client.",
            commands: &[
                "Return HTTP response with status 200.",
                "Include result data in the response payload.",
                "Log the response for debugging and analytics.",
            ],
            snippet: None,
        },
    ],
};

pub static KAFKA_FLOW: StageFlow = StageFlow {
    title: "Kafka Workflow",
    stages: &[
        Stage {
            id: "producer",
            name: "Producer",
            description: "The producer sends messages to a Kafka topic.",
            commands: &[
                "Initialize KafkaTemplate in Spring Boot.",
                "Run the producer: kafka-console-producer --topic my-topic --bootstrap-server localhost:9092",
            ],
            snippet: Some(
                "@Autowired
private KafkaTemplate<String, String> kafkaTemplate;

public void sendMessage(String topic, String message) {
    kafkaTemplate.send(topic, message);
}",
            ),
        },
        Stage {
            id: "topic",
            name: "Topic",
            description: "Messages are sent to a topic, which is split into partitions.",
            commands: &[
                "Define the topic configuration in Spring Boot.",
                "Check topic creation: kafka-topics --list --bootstrap-server localhost:9092",
            ],
            snippet: Some(
                "@Bean
public NewTopic createTopic() {
    return TopicBuilder.name(\"my-topic\")
                       .partitions(3)
                       .replicas(2)
                       .build();
}",
            ),
        },
        Stage {
            id: "broker",
            name: "Kafka Broker",
            description: "Kafka brokers store messages. A cluster has multiple brokers.",
            commands: &[
                "Start the Kafka broker: bin/kafka-server-start.sh config/server.properties",
                "Add brokers to the cluster by starting additional Kafka instances.",
                "Verify broker cluster: kafka-topics --describe --topic my-topic --bootstrap-server localhost:9092",
            ],
            snippet: None,
        },
        Stage {
            id: "partition",
            name: "Partition",
            description: "Partitions store subsets of messages for scalability.",
            commands: &[
                "Partitions are created automatically based on the topic configuration.",
                "Inspect partitions: kafka-topics --describe --topic my-topic --bootstrap-server localhost:9092",
            ],
            snippet: Some(
                "kafkaTemplate.send(new ProducerRecord<>(\"my-topic\", key, message));",
            ),
        },
        Stage {
            id: "consumerGroup",
            name: "Consumer Group",
            description: "Consumers in a group share the workload of reading messages.",
            commands: &[
                "Define the consumer in Spring Boot.",
                "Run the consumer: kafka-console-consumer --topic my-topic --group my-group --bootstrap-server localhost:9092",
            ],
            snippet: Some(
                "@KafkaListener(topics = \"my-topic\", groupId = \"my-group\")
public void listen(String message) {
    System.out.println(\"Received: \" + message);
}",
            ),
        },
    ],
};

pub static SPRING_BOOT_FLOW: StageFlow = StageFlow {
    title: "Spring Boot Workflow",
    stages: &[
        Stage {
            id: "startup",
            name: "Application Startup",
            description: "Spring Boot application starts up.",
            commands: &[
                "java -jar my-application.jar",
                "Log: Starting Spring Boot application with main()",
                "Initialize logging framework and system properties",
            ],
            snippet: None,
        },
        Stage {
            id: "dependencyInjection",
            name: "Dependency Injection",
            description: "Spring Boot performs dependency injection.",
            commands: &[
                "Scan for @Component, @Service, and @Repository annotations",
                "Inject dependencies using @Autowired",
                "Log: Resolving bean dependencies",
            ],
            snippet: None,
        },
        Stage {
            id: "contextInitialization",
            name: "Context Initialization",
            description: "Spring Boot initializes the application context.",
            commands: &[
                "ApplicationContext is initialized",
                "Load @Configuration and @PropertySource annotations",
                "Initialize BeanFactory and other contexts",
                "Log: ApplicationContext initialized successfully",
            ],
            snippet: None,
        },
        Stage {
            id: "beanCreation",
            name: "Bean Creation",
            description: "Beans are created and configured.",
            commands: &[
                "Instantiate @Bean methods and create singletons",
                "Log: Initializing beans and post-processors",
                "Run any BeanPostProcessor hooks, such as @PostConstruct",
            ],
            snippet: None,
        },
        Stage {
            id: "applicationReady",
            name: "Application Ready",
            description: "Application is ready to serve requests.",
            commands: &[
                "Log: Application started successfully",
                "Run CommandLineRunner or ApplicationRunner beans",
                "Start listening for HTTP or other protocol requests",
            ],
            snippet: None,
        },
    ],
};

pub static SPRING_BOOT_CONCEPTS: StageFlow = StageFlow {
    title: "Spring Boot Concepts Visualization",
    stages: &[
        Stage {
            id: "coreAnnotations",
            name: "Core Annotations",
            description: "Essential Spring Boot annotations",
            commands: &[
                "@SpringBootApplication",
                "@Configuration",
                "@Bean",
                "@Component, @Service, @Repository",
                "@Autowired",
                "@Value",
                "@Profile",
            ],
            snippet: Some(
                "@SpringBootApplication
public class MyApplication {
    public static void main(String[] args) {
        SpringApplication.run(MyApplication.class, args);
    }
}

@Service
public class MyService {
    @Autowired
    private MyRepository repository;

    @Value(\"${my.property}\")
    private String myProperty;
}",
            ),
        },
        Stage {
            id: "testing",
            name: "Testing",
            description: "Unit and integration testing in Spring Boot",
            commands: &[
                "@SpringBootTest",
                "@WebMvcTest",
                "@DataJpaTest",
                "@MockBean",
                "TestRestTemplate",
                "MockMvc",
            ],
            snippet: Some(
                "@SpringBootTest
class MyServiceTest {
    @Autowired
    private MyService service;

    @MockBean
    private MyRepository repository;

    @Test
    void testMyService() {
        when(repository.findById(1L)).thenReturn(Optional.of(new MyEntity()));
        MyDto result = service.getById(1L);
        assertNotNull(result);
    }
}",
            ),
        },
        Stage {
            id: "restApi",
            name: "REST API",
            description: "Building RESTful APIs with Spring Boot",
            commands: &[
                "@RestController",
                "@RequestMapping",
                "@GetMapping, @PostMapping, etc.",
                "@PathVariable, @RequestParam",
                "@RequestBody",
                "ResponseEntity",
            ],
            snippet: Some(
                "@RestController
@RequestMapping(\"/api/users\")
public class UserController {
    @Autowired
    private UserService userService;

    @GetMapping(\"/{id}\")
    public ResponseEntity<UserDto> getUser(@PathVariable Long id) {
        return ResponseEntity.ok(userService.getUserById(id));
    }
}",
            ),
        },
        Stage {
            id: "dataAccess",
            name: "Data Access",
            description: "Working with databases in Spring Boot",
            commands: &[
                "Spring Data JPA",
                "@Entity",
                "@Repository",
                "CrudRepository, JpaRepository",
                "@Transactional",
                "Query methods",
            ],
            snippet: Some(
                "@Repository
public interface UserRepository extends JpaRepository<User, Long> {
    List<User> findByNameContaining(String name);
}

@Service
public class UserService {
    @Autowired
    private UserRepository userRepository;

    @Transactional
    public User createUser(User user) {
        return userRepository.save(user);
    }
}",
            ),
        },
        Stage {
            id: "security",
            name: "Security",
            description: "Implementing security in Spring Boot applications",
            commands: &[
                "Spring Security",
                "@EnableWebSecurity",
                "@PreAuthorize, @PostAuthorize",
                "UserDetailsService",
                "JWT authentication",
                "OAuth2",
            ],
            snippet: Some(
                "@RestController
public class SecuredController {
    @GetMapping(\"/api/admin\")
    @PreAuthorize(\"hasRole('ADMIN')\")
    public String adminOnly() {
        return \"You are an admin!\";
    }
}",
            ),
        },
        Stage {
            id: "aop",
            name: "AOP",
            description: "Aspect-Oriented Programming in Spring Boot",
            commands: &[
                "@Aspect",
                "@Before, @After, @Around",
                "@Pointcut",
                "JoinPoint",
                "ProceedingJoinPoint",
            ],
            snippet: Some(
                "@Aspect
@Component
public class LoggingAspect {
    @Pointcut(\"execution(* com.example.service.*.*(..))\")
    private void serviceMethods() {}

    @Around(\"serviceMethods()\")
    public Object logMethodExecution(ProceedingJoinPoint joinPoint) throws Throwable {
        return joinPoint.proceed();
    }
}",
            ),
        },
        Stage {
            id: "actuator",
            name: "Actuator",
            description: "Monitoring and managing Spring Boot applications",
            commands: &[
                "Health checks",
                "Metrics",
                "Environment info",
                "Custom endpoints",
                "Security for actuator endpoints",
            ],
            snippet: Some(
                "# application.properties
management.endpoints.web.exposure.include=health,info,metrics
management.endpoint.health.show-details=always",
            ),
        },
    ],
};

pub static HIBERNATE_TOPICS: StageFlow = StageFlow {
    title: "Hibernate with Spring Boot",
    stages: &[
        Stage {
            id: "configuration",
            name: "Configuration",
            description: "Set up Hibernate with Spring Boot through application.properties.",
            commands: &[
                "Define database properties like URL, username, and password.",
                "Set Hibernate dialect for database compatibility.",
                "Enable logging for SQL queries.",
            ],
            snippet: Some(
                "# application.properties
spring.datasource.url=jdbc:mysql://localhost:3306/hibernate_db
spring.jpa.properties.hibernate.dialect=org.hibernate.dialect.MySQLDialect
spring.jpa.show-sql=true
spring.jpa.hibernate.ddl-auto=update",
            ),
        },
        Stage {
            id: "entityRelationships",
            name: "Entity Relationships",
            description: "Defines relationships between entities (One-to-One, One-to-Many, etc.).",
            commands: &[
                "Use annotations like @OneToOne, @OneToMany, @ManyToOne, @ManyToMany.",
                "Specify fetch types (EAGER or LAZY).",
                "Bidirectional vs unidirectional relationships.",
            ],
            snippet: Some(
                "@Entity
public class Author {
    @Id
    @GeneratedValue
    private Long id;

    @OneToMany(mappedBy = \"author\", fetch = FetchType.LAZY)
    private List<Book> books = new ArrayList<>();
}",
            ),
        },
        Stage {
            id: "caching",
            name: "Caching",
            description: "Improve performance using first-level and second-level caching.",
            commands: &[
                "First-level cache is session-scoped and mandatory.",
                "Second-level cache is shared across sessions.",
                "Providers include EhCache, Redis, and others.",
            ],
            snippet: Some(
                "spring.jpa.properties.hibernate.cache.use_second_level_cache=true",
            ),
        },
        Stage {
            id: "locking",
            name: "Locking Mechanisms",
            description: "Manage concurrency using optimistic and pessimistic locking.",
            commands: &[
                "Optimistic locking uses a version field to avoid conflicts.",
                "Pessimistic locking locks rows to prevent updates.",
            ],
            snippet: Some(
                "@Version
private int version;

Product product = entityManager.find(Product.class, id, LockModeType.PESSIMISTIC_WRITE);",
            ),
        },
        Stage {
            id: "inheritanceStrategies",
            name: "Inheritance Strategies",
            description: "Handle inheritance in Hibernate using various strategies.",
            commands: &[
                "Table-per-class: Each class has its own table.",
                "Single table: One table for all classes.",
                "Joined: Tables for base and derived classes.",
            ],
            snippet: Some(
                "@Entity
@Inheritance(strategy = InheritanceType.JOINED)
public class Vehicle {
    @Id
    @GeneratedValue
    private Long id;
}",
            ),
        },
        Stage {
            id: "queryOptimization",
            name: "Query Optimization",
            description: "Optimize queries using HQL, Criteria API, and join fetch.",
            commands: &[
                "Use HQL for object-oriented queries.",
                "Batch fetching reduces N+1 problems.",
                "Join fetch loads related entities.",
            ],
            snippet: Some(
                "List<Author> authors = session.createQuery(
    \"SELECT a FROM Author a JOIN FETCH a.books\", Author.class).getResultList();",
            ),
        },
    ],
};
